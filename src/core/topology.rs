//! # Line Topology
//!
//! The station taxonomy: which stations sit on which metro line.
//!
//! ```text
//! LineTopology
//! ├── BlueLine:  ["Miyapur", "JNTU College", ...]
//! ├── RedLine:   ["LB Nagar", ...]
//! └── GreenLine: ["JBS Parade Ground", ...]
//! ```
//!
//! Always exactly three lines. A line the server didn't send is an empty list,
//! never missing. The whole topology is replaced at once, never patched.

use std::fmt;

/// One of the three recognized metro lines, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Blue,
    Red,
    Green,
}

impl Line {
    pub const ALL: [Line; 3] = [Line::Blue, Line::Red, Line::Green];

    /// Key used by the backend's `elements` object.
    pub fn key(&self) -> &'static str {
        match self {
            Line::Blue => "BlueLine",
            Line::Red => "RedLine",
            Line::Green => "GreenLine",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Line::Blue => "Blue Line",
            Line::Red => "Red Line",
            Line::Green => "Green Line",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A row in a grouped station list: either a line header or a station under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationOption<'a> {
    Group(Line),
    Station { line: Line, name: &'a str },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTopology {
    blue: Vec<String>,
    red: Vec<String>,
    green: Vec<String>,
}

impl LineTopology {
    pub fn new(blue: Vec<String>, red: Vec<String>, green: Vec<String>) -> Self {
        Self { blue, red, green }
    }

    pub fn stations(&self, line: Line) -> &[String] {
        match line {
            Line::Blue => &self.blue,
            Line::Red => &self.red,
            Line::Green => &self.green,
        }
    }

    pub fn station_count(&self) -> usize {
        Line::ALL.iter().map(|line| self.stations(*line).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.station_count() == 0
    }

    /// Flattened option list: each line header followed by its stations.
    ///
    /// Headers are emitted even for empty lines, mirroring a `<select>` with
    /// three fixed option groups.
    pub fn options(&self) -> Vec<StationOption<'_>> {
        let mut options = Vec::with_capacity(self.station_count() + Line::ALL.len());
        for line in Line::ALL {
            options.push(StationOption::Group(line));
            options.extend(
                self.stations(line)
                    .iter()
                    .map(|name| StationOption::Station { line, name }),
            );
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LineTopology {
        LineTopology::new(
            vec!["Miyapur".into(), "Ameerpet".into()],
            vec![],
            vec!["JBS Parade Ground".into()],
        )
    }

    #[test]
    fn test_default_topology_has_three_empty_lines() {
        let topology = LineTopology::default();
        for line in Line::ALL {
            assert!(topology.stations(line).is_empty());
        }
        assert!(topology.is_empty());
    }

    #[test]
    fn test_station_count_sums_all_lines() {
        assert_eq!(sample().station_count(), 3);
        assert!(!sample().is_empty());
    }

    #[test]
    fn test_options_group_every_line_in_order() {
        let topology = sample();
        let options = topology.options();
        assert_eq!(
            options,
            vec![
                StationOption::Group(Line::Blue),
                StationOption::Station { line: Line::Blue, name: "Miyapur" },
                StationOption::Station { line: Line::Blue, name: "Ameerpet" },
                StationOption::Group(Line::Red),
                StationOption::Group(Line::Green),
                StationOption::Station { line: Line::Green, name: "JBS Parade Ground" },
            ]
        );
    }

    #[test]
    fn test_line_keys_match_backend() {
        let keys: Vec<_> = Line::ALL.iter().map(|l| l.key()).collect();
        assert_eq!(keys, vec!["BlueLine", "RedLine", "GreenLine"]);
    }
}
