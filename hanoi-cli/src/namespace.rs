//! Filesystem-shaped view of a puzzle.
//!
//! ```text
//! /            root directory, one entry per peg
//! /A /B /C     one directory per peg, labelled by letter
//! /A/0 /A/1    one read-only file per disc currently on that peg
//! ```
//!
//! A disc file's size is `1 << disc`, so bigger discs look bigger in a
//! listing. Moving a file between peg directories is the only write, and it
//! maps to exactly one [`Hanoi::try_move_disc`].

use hanoi_core::{peg_from_label, peg_label, Hanoi};
use serde::Serialize;

use crate::error::{CliError, CliResult};

/// What a path names. Produced by [`parse_path`], which checks syntax and
/// ranges but not whether a disc is actually on the named peg.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Node {
    Root,
    Peg(usize),
    Disc { peg: usize, disc: u32 },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Directory,
    File,
}

/// Synthesized metadata for one entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Attr {
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub mode: u32,
    pub nlink: u32,
    pub size: u64,
}

impl std::fmt::Display for Attr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.file_type {
            FileType::Directory => "directory",
            FileType::File => "regular file",
        };
        writeln!(f, "type: {}", kind)?;
        writeln!(f, "mode: {:04o}", self.mode)?;
        writeln!(f, "links: {}", self.nlink)?;
        write!(f, "size: {}", self.size)
    }
}

const DIR_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o444;

/// Parse `/`, `/X` or `/X/N`.
///
/// `X` must be the label of an existing peg and `N` a decimal disc number
/// below the disc count, with nothing trailing (`/A/4foo` and `/Afoo` are
/// rejected).
pub fn parse_path(path: &str, h: &Hanoi) -> Option<Node> {
    if path == "/" {
        return Some(Node::Root);
    }

    let rest = path.strip_prefix('/')?;
    let mut chars = rest.chars();
    let peg = peg_from_label(chars.next()?)?;
    if peg >= h.pegs_n() {
        return None;
    }

    let rest = chars.as_str();
    if rest.is_empty() {
        return Some(Node::Peg(peg));
    }

    let digits = rest.strip_prefix('/')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let disc: u32 = digits.parse().ok()?;
    if disc >= h.discs_n() {
        return None;
    }

    Some(Node::Disc { peg, disc })
}

/// Like [`parse_path`], but a disc path only resolves when that disc is on
/// that peg right now.
pub fn resolve(path: &str, h: &Hanoi) -> CliResult<Node> {
    let not_found = || CliError::NotFound {
        path: path.to_string(),
    };

    let node = parse_path(path, h).ok_or_else(not_found)?;
    if let Node::Disc { peg, disc } = node {
        if !h.pegs()[peg].contains(disc) {
            return Err(not_found());
        }
    }
    Ok(node)
}

/// Name of a peg directory ("A", "B", ...).
pub fn peg_name(peg: usize) -> String {
    peg_label(peg).map(String::from).unwrap_or_default()
}

pub fn attr(node: Node, h: &Hanoi) -> Attr {
    match node {
        // `.`, the parent link and one `..` per peg directory
        Node::Root => Attr {
            file_type: FileType::Directory,
            mode: DIR_MODE,
            nlink: 2 + h.pegs_n() as u32,
            size: 0,
        },
        Node::Peg(_) => Attr {
            file_type: FileType::Directory,
            mode: DIR_MODE,
            nlink: 2,
            size: 0,
        },
        Node::Disc { disc, .. } => Attr {
            file_type: FileType::File,
            mode: FILE_MODE,
            nlink: 1,
            size: 1u64 << disc,
        },
    }
}

/// Directory entries, `.` and `..` first.
///
/// Disc entries come from draining a peg snapshot, so they are in ascending
/// size order and never observe a half-applied move.
pub fn list(node: Node, path: &str, h: &Hanoi) -> CliResult<Vec<String>> {
    let mut entries = vec![".".to_string(), "..".to_string()];

    match node {
        Node::Root => {
            entries.extend((0..h.pegs_n()).map(peg_name));
        }
        Node::Peg(peg) => {
            let mut snapshot = h.get_peg_copy(peg)?;
            while let Some(disc) = snapshot.pop() {
                entries.push(disc.to_string());
            }
        }
        Node::Disc { .. } => {
            return Err(CliError::NotADirectory {
                path: path.to_string(),
            })
        }
    }

    Ok(entries)
}

/// A resolved rename: which disc goes from which peg to which.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Relocation {
    pub disc: u32,
    pub from: usize,
    pub to: usize,
}

/// Turn `mv SRC DST` into a relocation.
///
/// `SRC` must be an existing disc file. `DST` is either a peg directory or a
/// disc path under it with the same disc number; discs cannot be renamed.
pub fn relocation(src: &str, dst: &str, h: &Hanoi) -> CliResult<Relocation> {
    let invalid = |reason| CliError::InvalidRename {
        src: src.to_string(),
        dst: dst.to_string(),
        reason,
    };

    let (from, disc) = match resolve(src, h)? {
        Node::Disc { peg, disc } => (peg, disc),
        _ => return Err(invalid("only discs can be moved")),
    };

    let to = match parse_path(dst, h) {
        Some(Node::Peg(peg)) => peg,
        Some(Node::Disc { peg, disc: d }) if d == disc => peg,
        Some(Node::Disc { .. }) => return Err(invalid("a disc keeps its number")),
        Some(Node::Root) => return Err(invalid("discs live inside a peg")),
        None => {
            return Err(CliError::NotFound {
                path: dst.to_string(),
            })
        }
    };

    Ok(Relocation { disc, from, to })
}
