use std::collections::HashSet;

use crate::types::{CLUSTER_DEFAULT, CLUSTER_INTERNAL, CLUSTER_UNKNOWN_CLASS};

// Names of routines provided by the PHP runtime itself. The original
// analyzer captures this list once at startup via introspection; here it
// is a static snapshot of the common internal functions, and callers that
// need the exact list of their target runtime can inject their own.
const PHP_BUILTINS: &[&str] = &[
    "array_combine",
    "array_diff",
    "array_fill",
    "array_filter",
    "array_flip",
    "array_key_exists",
    "array_keys",
    "array_map",
    "array_merge",
    "array_pop",
    "array_push",
    "array_reduce",
    "array_reverse",
    "array_search",
    "array_shift",
    "array_slice",
    "array_splice",
    "array_unique",
    "array_unshift",
    "array_values",
    "array_walk",
    "call_user_func",
    "call_user_func_array",
    "ceil",
    "count",
    "date",
    "define",
    "defined",
    "dirname",
    "explode",
    "fclose",
    "feof",
    "fgets",
    "file_exists",
    "file_get_contents",
    "file_put_contents",
    "floor",
    "fopen",
    "fread",
    "func_get_args",
    "function_exists",
    "fwrite",
    "get_class",
    "gettype",
    "htmlspecialchars",
    "implode",
    "in_array",
    "intval",
    "is_array",
    "is_bool",
    "is_callable",
    "is_dir",
    "is_file",
    "is_int",
    "is_null",
    "is_numeric",
    "is_object",
    "is_string",
    "json_decode",
    "json_encode",
    "krsort",
    "ksort",
    "ltrim",
    "max",
    "md5",
    "microtime",
    "min",
    "mt_rand",
    "number_format",
    "preg_match",
    "preg_match_all",
    "preg_replace",
    "preg_split",
    "print_r",
    "printf",
    "rand",
    "realpath",
    "round",
    "rsort",
    "rtrim",
    "serialize",
    "sha1",
    "sort",
    "sprintf",
    "str_pad",
    "str_repeat",
    "str_replace",
    "str_split",
    "strcmp",
    "strlen",
    "strpos",
    "strrpos",
    "strstr",
    "strtolower",
    "strtotime",
    "strtoupper",
    "strval",
    "substr",
    "time",
    "trim",
    "ucfirst",
    "ucwords",
    "uksort",
    "unserialize",
    "urldecode",
    "urlencode",
    "usort",
    "var_dump",
    "var_export",
    "vsprintf",
];

/// Result of classifying a raw function/method name.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub cluster: String,
    pub is_builtin: bool,
}

/// Derives a display label, owning cluster and builtin flag from raw
/// symbol names. Pure over strings; the builtin set is fixed at
/// construction and never recomputed per call.
pub struct Classifier {
    builtins: HashSet<String>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::with_builtins(PHP_BUILTINS.iter().map(|s| s.to_string()))
    }

    /// Build a classifier around a caller-supplied builtin-name set.
    pub fn with_builtins(names: impl IntoIterator<Item = String>) -> Self {
        Classifier {
            builtins: names.into_iter().collect(),
        }
    }

    pub fn classify(&self, full_name: &str) -> Classification {
        let parts: Vec<&str> = full_name.split("::").collect();

        // Exactly class::method splits into a cluster and a label; anything
        // else (free function, empty name, extra separators) falls back to
        // the default cluster with the whole name as label.
        let (mut cluster, label) = if parts.len() == 2 {
            let cluster = if parts[0].is_empty() {
                CLUSTER_UNKNOWN_CLASS
            } else {
                parts[0]
            };
            (cluster.to_string(), parts[1])
        } else {
            (CLUSTER_DEFAULT.to_string(), full_name)
        };

        // Drop the call signature. Names without a parenthesis pass through
        // unchanged.
        let label = match label.find('(') {
            Some(idx) => &label[..idx],
            None => label,
        };

        let is_builtin = self.builtins.contains(label);
        if is_builtin {
            cluster = CLUSTER_INTERNAL.to_string();
        }

        Classification {
            label: label.to_string(),
            cluster,
            is_builtin,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_name_splits_into_cluster_and_label() {
        let c = Classifier::new();
        let result = c.classify("Foo::bar($x, $y)");
        assert_eq!(result.cluster, "Foo");
        assert_eq!(result.label, "bar");
        assert!(!result.is_builtin);
    }

    #[test]
    fn empty_class_part_maps_to_unknown_class() {
        let c = Classifier::new();
        let result = c.classify("::bar");
        assert_eq!(result.cluster, CLUSTER_UNKNOWN_CLASS);
        assert_eq!(result.label, "bar");
    }

    #[test]
    fn free_function_maps_to_default_cluster() {
        let c = Classifier::new();
        let result = c.classify("plainFunc");
        assert_eq!(result.cluster, CLUSTER_DEFAULT);
        assert_eq!(result.label, "plainFunc");
    }

    #[test]
    fn label_without_parenthesis_is_unchanged() {
        let c = Classifier::new();
        assert_eq!(c.classify("Foo::bar").label, "bar");
        assert_eq!(c.classify("Foo::bar()").label, "bar");
    }

    #[test]
    fn builtin_overrides_class_cluster() {
        let c = Classifier::new();
        let result = c.classify("Foo::strlen($s)");
        assert_eq!(result.cluster, CLUSTER_INTERNAL);
        assert_eq!(result.label, "strlen");
        assert!(result.is_builtin);
    }

    #[test]
    fn injected_builtin_set_is_honored() {
        let c = Classifier::with_builtins(vec!["my_builtin".to_string()]);
        assert!(c.classify("my_builtin()").is_builtin);
        assert!(!c.classify("strlen()").is_builtin);
    }

    #[test]
    fn malformed_names_degrade_to_default() {
        let c = Classifier::new();
        let result = c.classify("A::b::c()");
        assert_eq!(result.cluster, CLUSTER_DEFAULT);
        assert_eq!(result.label, "A::b::c");

        let empty = c.classify("");
        assert_eq!(empty.cluster, CLUSTER_DEFAULT);
        assert_eq!(empty.label, "");
    }
}
