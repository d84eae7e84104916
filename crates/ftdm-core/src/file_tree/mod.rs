//! Browsable preview of the framework archive shown in the download dialog
//!
//! Unlike the docs accordions, folders here expand independently of each
//! other. Folders shallower than [`AUTO_EXPAND_DEPTH`] start expanded.

mod framework;

use std::collections::HashSet;

use serde::Serialize;

pub use framework::FRAMEWORK_TREE;

/// Folders at a depth below this are expanded when the tree is first shown
pub const AUTO_EXPAND_DEPTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileNode {
    pub name: &'static str,
    pub kind: NodeKind,
    pub children: &'static [FileNode],
}

pub const fn file(name: &'static str) -> FileNode {
    FileNode {
        name,
        kind: NodeKind::File,
        children: &[],
    }
}

pub const fn folder(name: &'static str, children: &'static [FileNode]) -> FileNode {
    FileNode {
        name,
        kind: NodeKind::Folder,
        children,
    }
}

impl FileNode {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

/// Number of files (not folders) under `nodes`, recursively
pub fn file_count(nodes: &[FileNode]) -> usize {
    nodes
        .iter()
        .map(|n| match n.kind {
            NodeKind::File => 1,
            NodeKind::Folder => file_count(n.children),
        })
        .sum()
}

/// One line of the flattened, currently visible tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub node: &'static FileNode,
    pub depth: usize,
    /// Slash-joined path from the root, unique within the tree
    pub path: String,
    pub expanded: bool,
}

/// Expansion and cursor state for a [`FileNode`] forest
#[derive(Debug, Clone)]
pub struct FileTreeState {
    roots: &'static [FileNode],
    expanded: HashSet<String>,
    selected: usize,
}

impl Default for FileTreeState {
    fn default() -> Self {
        Self::new(FRAMEWORK_TREE)
    }
}

impl FileTreeState {
    pub fn new(roots: &'static [FileNode]) -> Self {
        let mut state = Self {
            roots,
            expanded: HashSet::new(),
            selected: 0,
        };
        state.reset();
        state
    }

    /// Back to the auto-expanded initial view
    pub fn reset(&mut self) {
        self.expanded.clear();
        self.selected = 0;
        for root in self.roots {
            Self::auto_expand(root, String::new(), 0, &mut self.expanded);
        }
    }

    fn auto_expand(node: &FileNode, parent: String, depth: usize, out: &mut HashSet<String>) {
        if !node.is_folder() || depth >= AUTO_EXPAND_DEPTH {
            return;
        }
        let path = join(&parent, node.name);
        for child in node.children {
            Self::auto_expand(child, path.clone(), depth + 1, out);
        }
        out.insert(path);
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub fn toggle_expanded(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
    }

    /// Flattened list of everything not hidden inside a collapsed folder
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for root in self.roots {
            self.collect_visible(root, "", 0, &mut rows);
        }
        rows
    }

    fn collect_visible(
        &self,
        node: &'static FileNode,
        parent: &str,
        depth: usize,
        rows: &mut Vec<TreeRow>,
    ) {
        let path = join(parent, node.name);
        let expanded = node.is_folder() && self.is_expanded(&path);
        rows.push(TreeRow {
            node,
            depth,
            path: path.clone(),
            expanded,
        });
        if expanded {
            for child in node.children {
                self.collect_visible(child, &path, depth + 1, rows);
            }
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let len = self.visible_rows().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Toggle the folder under the cursor. Files are ignored.
    pub fn toggle_selected(&mut self) {
        let rows = self.visible_rows();
        let Some(row) = rows.get(self.selected) else {
            return;
        };
        if row.node.is_folder() {
            let path = row.path.clone();
            self.toggle_expanded(&path);
        }
        // collapsing may have shortened the list
        let len = self.visible_rows().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INNER: &[FileNode] = &[file("deep.md")];
    const MID: &[FileNode] = &[folder("inner", INNER), file("mid.md")];
    const ROOT: &[FileNode] = &[folder("mid", MID), file("README.md")];
    static SAMPLE: &[FileNode] = &[folder("root", ROOT)];

    fn names(state: &FileTreeState) -> Vec<&'static str> {
        state.visible_rows().iter().map(|r| r.node.name).collect()
    }

    #[test]
    fn test_shallow_levels_start_expanded() {
        let state = FileTreeState::new(SAMPLE);
        assert!(state.is_expanded("root"));
        assert!(state.is_expanded("root/mid"));
        assert!(!state.is_expanded("root/mid/inner"));
        assert_eq!(names(&state), ["root", "mid", "inner", "mid.md", "README.md"]);
    }

    #[test]
    fn test_folders_toggle_independently() {
        let mut state = FileTreeState::new(SAMPLE);
        state.toggle_expanded("root/mid/inner");
        assert!(state.is_expanded("root/mid/inner"));
        assert!(state.is_expanded("root/mid"));
        assert_eq!(
            names(&state),
            ["root", "mid", "inner", "deep.md", "mid.md", "README.md"]
        );
    }

    #[test]
    fn test_rows_carry_depth_and_path() {
        let state = FileTreeState::new(SAMPLE);
        let rows = state.visible_rows();
        assert_eq!(rows[2].path, "root/mid/inner");
        assert_eq!(rows[2].depth, 2);
        assert!(!rows[2].expanded);
    }

    #[test]
    fn test_toggle_selected_collapses_and_clamps_cursor() {
        let mut state = FileTreeState::new(SAMPLE);
        for _ in 0..10 {
            state.select_next();
        }
        assert_eq!(state.selected_index(), 4);

        state.select_previous();
        state.select_previous();
        state.select_previous(); // on "mid"
        assert_eq!(state.visible_rows()[state.selected_index()].node.name, "mid");
        state.toggle_selected();
        assert_eq!(names(&state), ["root", "mid", "README.md"]);
        assert_eq!(state.selected_index(), 1);
    }

    #[test]
    fn test_toggle_selected_on_file_is_noop() {
        let mut state = FileTreeState::new(SAMPLE);
        state.select_next();
        state.select_next();
        state.select_next(); // mid.md
        let before = names(&state);
        state.toggle_selected();
        assert_eq!(names(&state), before);
    }

    #[test]
    fn test_reset_restores_initial_view() {
        let mut state = FileTreeState::new(SAMPLE);
        state.toggle_expanded("root");
        state.select_next();
        state.reset();
        assert_eq!(state.selected_index(), 0);
        assert!(state.is_expanded("root"));
    }

    #[test]
    fn test_framework_tree_shape() {
        assert_eq!(FRAMEWORK_TREE.len(), 1);
        assert_eq!(FRAMEWORK_TREE[0].name, "EFTDM_FRAMEWORK");
        assert!(file_count(FRAMEWORK_TREE) > 100);

        let state = FileTreeState::default();
        let rows = state.visible_rows();
        assert!(rows.iter().any(|r| r.path == "EFTDM_FRAMEWORK/scripts/framework-setup.sh"));
        assert!(rows.iter().all(|r| r.depth <= AUTO_EXPAND_DEPTH));
    }
}
