// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use atree::{Arena, Token};
use sigscan::StructureLine;
use treeline::Tree;

fn label(line: &StructureLine) -> String {
    match line {
        StructureLine::Element {
            offset,
            tag_name,
            content,
            ..
        } => {
            if content.is_empty() {
                format!("{tag_name} @{offset}")
            } else {
                format!("{tag_name} @{offset}: {content}")
            }
        }
        StructureLine::HexDump { offset, error, .. } => {
            format!("[undecoded @{offset}: {error}]")
        }
    }
}

fn walk_tree(tree: &Arena<String>, token: &Token) -> Tree<String> {
    token.children_tokens(tree).fold(
        Tree::root(tree[*token].data.clone()),
        |mut root, entry_token| {
            if entry_token.is_leaf(tree) {
                root.push(Tree::root(tree[entry_token].data.clone()));
            } else {
                root.push(walk_tree(tree, &entry_token));
            }
            root
        },
    )
}

/// Render a structure listing as a tree diagram rooted at `title`.
///
/// A hex dump line belongs to the element that owns the failed region, so
/// it hangs under the element one level up.
pub fn tree(title: &str, lines: &[StructureLine]) -> String {
    let (mut arena, root) = Arena::with_data(title.to_string());

    // parents[d] is the node that elements at depth d attach to
    let mut parents: Vec<Token> = vec![root];
    for line in lines {
        let depth = line.depth().min(parents.len() - 1);
        parents.truncate(depth + 1);
        let node = parents[depth].append(&mut arena, label(line));
        parents.push(node);
    }

    format!("Tree View:\n {}", walk_tree(&arena, &root))
}
