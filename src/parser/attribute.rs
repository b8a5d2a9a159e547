//! Classification of `name: value[,value...]` attribute lines.

use super::trim_decorations;

/// Attribute kinds a task body line can set.
///
/// ```markdown
/// # Tasks
/// ## build
/// requires: fmt, lint
/// env: RUST_LOG=debug
/// dir: crates/core
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    /// Tasks that must run before this one. Surface names `req` and
    /// `requires`; values accumulate across repeated lines.
    DependsOn,
    /// Environment variable assignments for the task's commands. Surface
    /// names `env` and `environment`; values accumulate.
    Env,
    /// Working directory for the task's commands. Surface names `dir` and
    /// `directory`; assignable at most once per task.
    Dir,
    /// Required inputs, provided as command-line arguments or environment
    /// variables. Surface name `inputs`; values accumulate.
    Inputs,
}

/// Synonym table mapping normalized attribute names to their kind. Adding
/// a synonym is a one-line edit here.
fn lookup(name: &str) -> Option<AttributeKind> {
    match name {
        "req" | "requires" => Some(AttributeKind::DependsOn),
        "env" | "environment" => Some(AttributeKind::Env),
        "dir" | "directory" => Some(AttributeKind::Dir),
        "inputs" => Some(AttributeKind::Inputs),
        _ => None,
    }
}

/// Classify a line as an attribute. Splits on the first `:`, normalizes
/// the left side (decorations stripped, lower-cased), and resolves it
/// against the synonym table. Returns the kind and the raw right-hand
/// side, or None when the line is not an attribute.
pub fn classify(line: &str) -> Option<(AttributeKind, &str)> {
    let (name, rest) = line.split_once(':')?;
    let kind = lookup(&trim_decorations(name).to_lowercase())?;
    Some((kind, rest))
}

/// Split an attribute value list on `,` into decoration-trimmed tokens,
/// left to right. Tokens that trim to nothing are dropped.
pub fn split_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(trim_decorations)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_resolve_to_one_kind() {
        assert_eq!(classify("req: a").unwrap().0, AttributeKind::DependsOn);
        assert_eq!(classify("requires: a").unwrap().0, AttributeKind::DependsOn);
        assert_eq!(classify("env: A=1").unwrap().0, AttributeKind::Env);
        assert_eq!(classify("environment: A=1").unwrap().0, AttributeKind::Env);
        assert_eq!(classify("dir: sub").unwrap().0, AttributeKind::Dir);
        assert_eq!(classify("directory: sub").unwrap().0, AttributeKind::Dir);
        assert_eq!(classify("inputs: NAME").unwrap().0, AttributeKind::Inputs);
    }

    #[test]
    fn test_name_normalization() {
        // Decorated and mixed-case names still resolve.
        assert_eq!(classify("**Requires**: a").unwrap().0, AttributeKind::DependsOn);
        assert_eq!(classify("`env`: A=1").unwrap().0, AttributeKind::Env);
        assert_eq!(classify("  DIR  : sub").unwrap().0, AttributeKind::Dir);
    }

    #[test]
    fn test_unknown_name_falls_through() {
        assert!(classify("note: remember this").is_none());
        assert!(classify("reqs: a").is_none());
    }

    #[test]
    fn test_line_without_colon_falls_through() {
        assert!(classify("plain description text").is_none());
    }

    #[test]
    fn test_split_values_trims_in_order() {
        assert_eq!(
            split_values(" a , _b_ , `c` "),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_split_values_drops_empty_tokens() {
        assert_eq!(split_values("a,,b"), vec!["a".to_string(), "b".to_string()]);
        assert!(split_values("").is_empty());
        assert!(split_values(" , , ").is_empty());
    }
}
