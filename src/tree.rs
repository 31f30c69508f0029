//! Depth-first traversal of the objects in a HDF5 file.
use std::fmt;

use anyhow::Context;
use hdf5::{LinkType, LocationInfo, LocationToken, LocationType};

use crate::types::{Datatype, Shape};

/// A named object in the file.
pub enum Node {
    Group(hdf5::Group),
    Dataset(hdf5::Dataset),
}

impl Node {
    pub fn location(&self) -> &hdf5::Location {
        match self {
            Node::Group(g) => g,
            Node::Dataset(d) => d,
        }
    }

    pub fn is_dataset(&self) -> bool {
        matches!(self, Node::Dataset(_))
    }

    /// Shape and element type, for datasets.
    pub fn dataset_info(&self) -> Result<Option<(Shape, Datatype)>, anyhow::Error> {
        match self {
            Node::Dataset(d) => Ok(Some((Shape::from(d), d.dtype()?.into()))),
            Node::Group(_) => Ok(None),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Group(g) => write!(f, "Group <{}>", g.name()),
            Node::Dataset(d) => write!(f, "Dataset <{}>", d.name()),
        }
    }
}

/// Pre-order walk below a group, yielding `(path, node)` with paths relative to the group
/// (`"G"`, `"G/D"`).
///
/// Members of a group are visited in ascending order of their names, so two walks over an
/// unchanged file yield the same sequence. Members of a group are listed when the group is
/// reached, not up front. The walk ends after the first error.
///
/// Only hard links are followed and every object is yielded once, at the first path it is
/// reached by. Soft and external links are skipped.
pub struct Walk {
    root: Option<hdf5::Group>,
    stack: Vec<Entry>,
    seen: Vec<LocationToken>,
}

/// A member waiting to be visited. Objects with more than one hard link carry their token.
type Entry = (String, Node, Option<LocationToken>);

pub fn walk(root: &hdf5::Group) -> Walk {
    Walk {
        root: Some(root.clone()),
        stack: Vec::new(),
        seen: Vec::new(),
    }
}

fn shared_token(info: &LocationInfo) -> Option<LocationToken> {
    (info.num_links > 1).then_some(info.token)
}

fn members(prefix: Option<&str>, g: &hdf5::Group) -> Result<Vec<Entry>, anyhow::Error> {
    let mut names = g.iter_visit_default(Vec::new(), |_, name, link, names| {
        match link.link_type {
            LinkType::Hard => names.push(name.to_owned()),
            _ => trace!("{}/{name}: skipping {:?} link", prefix.unwrap_or(""), link.link_type),
        }
        true
    })?;
    names.sort();

    let mut nodes = Vec::with_capacity(names.len());

    for name in names {
        let path = match prefix {
            Some(p) => format!("{p}/{name}"),
            None => name.clone(),
        };

        let info = g
            .loc_info_by_name(&name)
            .with_context(|| format!("{path}: unable to get object info"))?;

        let node = match info.loc_type {
            LocationType::Group => Node::Group(g.group(&name)?),
            LocationType::Dataset => Node::Dataset(g.dataset(&name)?),
            _ => {
                trace!("{path}: skipping named datatype");
                continue;
            }
        };

        nodes.push((path, node, shared_token(&info)));
    }

    Ok(nodes)
}

impl Walk {
    fn push_members(&mut self, prefix: Option<&str>, g: &hdf5::Group) -> Result<(), anyhow::Error> {
        let nodes = members(prefix, g)?;
        trace!("{}: {} members", prefix.unwrap_or("/"), nodes.len());

        // Reversed so that the first member is popped first.
        self.stack.extend(nodes.into_iter().rev());

        Ok(())
    }

    fn start(&mut self, root: &hdf5::Group) -> Result<(), anyhow::Error> {
        // The root may be reachable again through a hard link below it.
        if let Some(token) = shared_token(&root.loc_info()?) {
            self.seen.push(token);
        }

        self.push_members(None, root)
    }

    fn fail(&mut self, e: anyhow::Error) -> Option<Result<(String, Node), anyhow::Error>> {
        self.stack.clear();
        Some(Err(e))
    }
}

impl Iterator for Walk {
    type Item = Result<(String, Node), anyhow::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            if let Err(e) = self.start(&root) {
                return self.fail(e);
            }
        }

        loop {
            let (path, node, token) = self.stack.pop()?;

            if let Some(token) = token {
                if self.seen.contains(&token) {
                    trace!("{path}: already visited");
                    continue;
                }
                self.seen.push(token);
            }

            if let Node::Group(g) = &node {
                if let Err(e) = self.push_members(Some(&path), g) {
                    return self.fail(e);
                }
            }

            return Some(Ok((path, node)));
        }
    }
}

impl std::iter::FusedIterator for Walk {}
