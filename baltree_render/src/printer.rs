use std::fmt::Display;

use baltree_config::RenderSettings;
use baltree_core::{NodeRef, Tree};

use crate::layout::render;
use crate::theme::Theme;

/// Renders trees as text using the configured theme
#[derive(Debug, Clone)]
pub struct TreePrinter {
    theme: Theme,
    show_parent: bool,
    empty_label: String,
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::from_config(&RenderSettings::default())
    }
}

impl TreePrinter {
    pub fn from_config(settings: &RenderSettings) -> Self {
        Self {
            theme: Theme::from_config(settings),
            show_parent: settings.show_parent,
            empty_label: settings.empty_label.clone(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Values only. Absent children are drawn when their sibling exists.
    pub fn print<T: Display, C>(&self, tree: &Tree<T, C>) -> String {
        self.print_from(tree.root())
    }

    pub fn print_from<T: Display, C>(&self, node: Option<NodeRef<'_, T, C>>) -> String {
        render(
            node,
            |n| match n {
                Some(n) => self.theme.paint(n.color(), n.value().to_string()),
                None => self.empty_label.clone(),
            },
            |n| match n {
                Some(n) if n.left().is_some() || n.right().is_some() => vec![n.left(), n.right()],
                _ => Vec::new(),
            },
        )
    }

    /// Color tag, value and parent value of every node, with all absent
    /// children spelled out.
    pub fn debug_print<T: Display, C>(&self, tree: &Tree<T, C>) -> String {
        self.debug_print_from(tree.root())
    }

    pub fn debug_print_from<T: Display, C>(&self, node: Option<NodeRef<'_, T, C>>) -> String {
        render(
            node,
            |n| match n {
                Some(n) => self.debug_label(n),
                None => self.empty_label.clone(),
            },
            |n| match n {
                Some(n) => vec![n.left(), n.right()],
                None => Vec::new(),
            },
        )
    }

    fn debug_label<T: Display, C>(&self, node: &NodeRef<'_, T, C>) -> String {
        let mut label = format!("{} {}", Theme::tag(node.color()), node.value());
        if self.show_parent {
            match node.parent() {
                Some(parent) => label.push_str(&format!(" {}", parent.value())),
                None => label.push_str(" null"),
            }
        }
        self.theme.paint(node.color(), label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baltree_core::Natural;

    fn plain() -> TreePrinter {
        TreePrinter::default().with_theme(Theme::plain())
    }

    fn sample() -> Tree<i32> {
        let mut tree = Tree::new();
        for v in [1, 3, 2, 5] {
            tree.insert(v);
        }
        tree
    }

    #[test]
    fn test_print() {
        let expected = "\
2
├── 1
└─┬ 3
  ├── (null)
  └── 5
";
        assert_eq!(plain().print(&sample()), expected);
    }

    #[test]
    fn test_debug_print() {
        let expected = "\
B 2 null
├─┬ B 1 2
│ ├── (null)
│ └── (null)
└─┬ B 3 2
  ├── (null)
  └─┬ R 5 3
    ├── (null)
    └── (null)
";
        assert_eq!(plain().debug_print(&sample()), expected);
    }

    #[test]
    fn test_debug_print_without_parents() {
        let settings = RenderSettings {
            colors: false,
            show_parent: false,
            ..RenderSettings::default()
        };
        let printer = TreePrinter::from_config(&settings);
        let mut tree = Tree::with_comparator(Natural);
        tree.insert(7);

        assert_eq!(printer.debug_print(&tree), "B 7\n├── (null)\n└── (null)\n");
    }

    #[test]
    fn test_empty_tree() {
        let tree: Tree<i32> = Tree::new();
        assert_eq!(plain().print(&tree), "(null)\n");

        let settings = RenderSettings {
            colors: false,
            empty_label: "nil".to_string(),
            ..RenderSettings::default()
        };
        assert_eq!(TreePrinter::from_config(&settings).debug_print(&tree), "nil\n");
    }

    #[test]
    fn test_print_subtree() {
        let tree = sample();
        let three = tree.find(&3);
        assert_eq!(plain().print_from(three), "3\n├── (null)\n└── 5\n");
    }
}
