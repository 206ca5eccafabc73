//! Tree-dump helpers for snapshot-style assertions.

use crate::host::Host;
use crate::testing::host::FakeHost;

/// Render the host's widget tree as indented text, one `id (Kind)` line per
/// widget, children indented two spaces under their parent.
///
/// Deterministic: roots in creation order, children in sibling order.
pub fn tree_to_string(host: &FakeHost) -> String {
    let mut out = String::new();
    for root in host.roots() {
        render(host, root, 0, &mut out);
    }
    out
}

fn render(host: &FakeHost, id: &str, depth: usize, out: &mut String) {
    let kind = host.widget_kind(id).unwrap_or("?");
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(id);
    out.push_str(" (");
    out.push_str(kind);
    out.push_str(")\n");
    if let Ok(children) = host.children(id) {
        for child in children {
            render(host, &child, depth + 1, out);
        }
    }
}
