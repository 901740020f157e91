//! Tree construction: walk a registration path and insert the final node
//!
//! Every path segment but the last must already exist as a command; options
//! never gate a path. The final segment is created under the node reached by
//! the walk, replacing any same-kind node with that name (last registration
//! wins unless strict mode is enabled).

use super::error::{RegistryError, RegistryResult};
use super::node::{CommandNode, NodeKind, NodeSpec, OptionNode};

pub(crate) fn insert(
    root: &mut CommandNode,
    strict: bool,
    order: usize,
    kind: NodeKind,
    path: &[&str],
    spec: NodeSpec,
) -> RegistryResult<()> {
    if strict && spec.arity < -1 {
        return Err(RegistryError::InvalidArity { arity: spec.arity });
    }

    let Some((last, intermediates)) = path.split_last() else {
        return Err(RegistryError::WrongPath {
            parent: root.name.clone(),
            segment: String::new(),
        });
    };

    let mut node = &mut *root;
    let mut father = node.name.clone();
    for segment in intermediates {
        match node.commands.get_mut(*segment) {
            Some(child) => {
                father.push(' ');
                father.push_str(segment);
                node = child;
            }
            None => {
                return Err(RegistryError::WrongPath {
                    parent: father,
                    segment: segment.to_string(),
                });
            }
        }
    }

    match kind {
        NodeKind::Command => {
            if strict && node.commands.contains_key(*last) {
                return Err(RegistryError::DuplicateNode {
                    kind,
                    name: last.to_string(),
                    parent: father,
                });
            }
            let child = CommandNode::from_spec(last, &father, order, spec);
            node.commands.insert(last.to_string(), child);
        }
        NodeKind::Option => {
            if strict && node.options.contains_key(*last) {
                return Err(RegistryError::DuplicateNode {
                    kind,
                    name: last.to_string(),
                    parent: father,
                });
            }
            let child = OptionNode::from_spec(last, &father, order, spec);
            node.options.insert(last.to_string(), child);
        }
    }
    log::debug!("registered {} [{}] under [{}]", kind, last, father);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> CommandNode {
        CommandNode::new("app")
    }

    #[test]
    fn test_insert_at_root() {
        let mut root = root();
        insert(
            &mut root,
            false,
            1,
            NodeKind::Command,
            &["build"],
            NodeSpec::default(),
        )
        .unwrap();
        let child = &root.commands["build"];
        assert_eq!(child.name, "build");
        assert_eq!(child.father, "app");
        assert_eq!(child.order, 1);
    }

    #[test]
    fn test_father_label_accumulates_along_the_walk() {
        let mut root = root();
        insert(
            &mut root,
            false,
            1,
            NodeKind::Command,
            &["mod"],
            NodeSpec::default(),
        )
        .unwrap();
        insert(
            &mut root,
            false,
            2,
            NodeKind::Command,
            &["mod", "download"],
            NodeSpec::default(),
        )
        .unwrap();
        insert(
            &mut root,
            false,
            3,
            NodeKind::Option,
            &["mod", "download", "-force"],
            NodeSpec::default(),
        )
        .unwrap();

        let download = &root.commands["mod"].commands["download"];
        assert_eq!(download.father, "app mod");
        assert_eq!(download.full_name(), "app mod download");
        let force = &download.options["-force"];
        assert_eq!(force.father, "app mod download");
    }

    #[test]
    fn test_missing_intermediate_is_wrong_path() {
        let mut root = root();
        let err = insert(
            &mut root,
            false,
            1,
            NodeKind::Option,
            &["missing", "-o"],
            NodeSpec::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RegistryError::WrongPath {
                parent: "app".into(),
                segment: "missing".into()
            }
        );
        // the walk failed before any mutation
        assert!(root.commands.is_empty());
        assert!(root.options.is_empty());
    }

    #[test]
    fn test_options_never_gate_a_path() {
        let mut root = root();
        insert(
            &mut root,
            false,
            1,
            NodeKind::Option,
            &["-o"],
            NodeSpec::default(),
        )
        .unwrap();
        let err = insert(
            &mut root,
            false,
            2,
            NodeKind::Command,
            &["-o", "sub"],
            NodeSpec::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RegistryError::WrongPath { .. }));
    }

    #[test]
    fn test_empty_path_is_wrong_path() {
        let mut root = root();
        let err = insert(
            &mut root,
            false,
            1,
            NodeKind::Command,
            &[],
            NodeSpec::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RegistryError::WrongPath { .. }));
    }

    #[test]
    fn test_last_registration_wins_by_default() {
        let mut root = root();
        insert(
            &mut root,
            false,
            1,
            NodeKind::Command,
            &["dup"],
            NodeSpec {
                describe_brief: "first".into(),
                ..NodeSpec::default()
            },
        )
        .unwrap();
        insert(
            &mut root,
            false,
            2,
            NodeKind::Command,
            &["dup"],
            NodeSpec {
                describe_brief: "second".into(),
                ..NodeSpec::default()
            },
        )
        .unwrap();
        assert_eq!(root.commands["dup"].describe_brief, "second");
        assert_eq!(root.commands["dup"].order, 2);
    }

    #[test]
    fn test_command_and_option_may_share_a_name() {
        // commands and options live in separate maps; this is not a duplicate
        let mut root = root();
        insert(
            &mut root,
            true,
            1,
            NodeKind::Command,
            &["x"],
            NodeSpec::default(),
        )
        .unwrap();
        insert(
            &mut root,
            true,
            2,
            NodeKind::Option,
            &["x"],
            NodeSpec::default(),
        )
        .unwrap();
        assert!(root.commands.contains_key("x"));
        assert!(root.options.contains_key("x"));
    }

    #[test]
    fn test_strict_rejects_duplicates() {
        let mut root = root();
        insert(
            &mut root,
            true,
            1,
            NodeKind::Option,
            &["-o"],
            NodeSpec::default(),
        )
        .unwrap();
        let err = insert(
            &mut root,
            true,
            2,
            NodeKind::Option,
            &["-o"],
            NodeSpec::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateNode {
                kind: NodeKind::Option,
                name: "-o".into(),
                parent: "app".into()
            }
        );
    }

    #[test]
    fn test_strict_rejects_arity_below_consume_rest() {
        let mut root = root();
        let err = insert(
            &mut root,
            true,
            1,
            NodeKind::Option,
            &["-o"],
            NodeSpec {
                arity: -2,
                ..NodeSpec::default()
            },
        )
        .unwrap_err();
        assert_eq!(err, RegistryError::InvalidArity { arity: -2 });

        // -1 itself stays legal in strict mode
        insert(
            &mut root,
            true,
            2,
            NodeKind::Option,
            &["-rest"],
            NodeSpec {
                arity: -1,
                ..NodeSpec::default()
            },
        )
        .unwrap();
    }
}
