/// Draw a tree with box-drawing connectors, one node per line.
///
/// `label` turns a node into its text and `children` lists the nodes hung
/// below it, in drawing order. The root is printed flush left and every
/// line ends with a newline.
///
/// ```text
/// 2
/// ├── 1
/// └─┬ 3
///   ├── (null)
///   └── 5
/// ```
pub fn render<N, L, K, I>(root: N, mut label: L, mut children: K) -> String
where
    L: FnMut(&N) -> String,
    K: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut out = label(&root);
    out.push('\n');

    let kids: Vec<N> = children(&root).into_iter().collect();
    draw_children(&mut out, kids, "", &mut label, &mut children);
    out
}

fn draw_children<N, L, K, I>(
    out: &mut String,
    kids: Vec<N>,
    prefix: &str,
    label: &mut L,
    children: &mut K,
)
where
    L: FnMut(&N) -> String,
    K: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let count = kids.len();
    for (index, kid) in kids.into_iter().enumerate() {
        let last = index + 1 == count;
        let grandkids: Vec<N> = children(&kid).into_iter().collect();

        out.push_str(prefix);
        out.push_str(if last { "└─" } else { "├─" });
        out.push_str(if grandkids.is_empty() { "─ " } else { "┬ " });
        out.push_str(&label(&kid));
        out.push('\n');

        let nested = format!("{}{}", prefix, if last { "  " } else { "│ " });
        draw_children(out, grandkids, &nested, label, children);
    }
}
