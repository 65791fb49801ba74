//! Human-readable grid rendering for diagnostics.
//!
//! One character per cell: `x` impassable, then by search state — ` `
//! unexplored, `o` open, `-` closed, `@` on the extracted path, `S`/`G`
//! start and goal. The statistics line comes first. This presentation is
//! diagnostic only and is not part of the search contract.

use std::fmt;
use std::fmt::Write as _;

use gridpath_core::Coord;

use crate::cost::Cost;
use crate::graph::GridGraph;
use crate::node::NodeState;

impl<C: Cost> fmt::Display for GridGraph<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.stats())?;
        for y in 0..self.matrix().height() {
            for x in 0..self.matrix().width() {
                let c = Coord::new(x, y);
                let ch = if self.matrix().weight(c) < C::zero() {
                    'x'
                } else {
                    match self.node(c).state {
                        NodeState::Unexplored => ' ',
                        NodeState::Open => 'o',
                        NodeState::Closed => '-',
                        NodeState::Result => '@',
                        NodeState::Start => 'S',
                        NodeState::Goal => 'G',
                    }
                };
                f.write_char(ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SearchGraph;

    #[test]
    fn renders_terrain_and_search_state() {
        let weights = vec![
            1.0, 1.0, 1.0, //
            1.0, -1.0, 1.0, //
            1.0, 1.0, 1.0,
        ];
        let mut g = GridGraph::new(3, 3, weights, false).unwrap();
        let start = Coord::new(0, 0);
        g.open(start, 0.0, 0.0, start);
        g.close_front();
        g.open(Coord::new(1, 0), 1.0, 3.0, start);
        g.open(Coord::new(0, 1), 1.0, 3.0, start);

        let rendered = g.to_string();
        let expected = concat!(
            "opened: 3 reopened: 0 closed: 1 priority increased: 0\n",
            "-o \n",
            "ox \n",
            "   \n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn renders_extracted_path_annotations() {
        let mut g = GridGraph::new(3, 1, vec![1.0; 3], false).unwrap();
        let a = Coord::new(0, 0);
        let b = Coord::new(1, 0);
        let c = Coord::new(2, 0);
        g.open(a, 0.0, 2.0, a);
        g.close_front();
        g.open(b, 1.0, 1.0, a);
        g.close_front();
        g.open(c, 2.0, 0.0, b);
        g.close_front();
        g.extract_path(c);

        let rendered = g.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "S@G");
    }
}
