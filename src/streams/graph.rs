//! Stream dependency graph

use super::descriptor::StreamDescriptor;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::types::Record;
use std::collections::HashSet;

/// Maps a parent record to the context of one child sync
///
/// Returning `None` skips the child for that record.
pub type ContextFn = fn(&Record) -> Option<Context>;

/// A parent → child dependency
#[derive(Debug, Clone)]
pub struct ParentEdge {
    pub parent: String,
    pub child: String,
    pub context: ContextFn,
}

impl ParentEdge {
    /// Create an edge
    pub fn new(parent: impl Into<String>, child: impl Into<String>, context: ContextFn) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
            context,
        }
    }

    /// Derive the child context from a parent record
    pub fn child_context(&self, record: &Record) -> Option<Context> {
        (self.context)(record)
    }
}

/// Validated set of streams and their parent edges
#[derive(Debug, Clone)]
pub struct StreamGraph {
    streams: Vec<StreamDescriptor>,
    edges: Vec<ParentEdge>,
}

impl StreamGraph {
    /// Build a graph, checking that:
    /// - stream names are unique
    /// - edges reference declared streams
    /// - each stream has at most one parent and there are no cycles
    /// - root streams need no path variables
    pub fn new(streams: Vec<StreamDescriptor>, edges: Vec<ParentEdge>) -> Result<Self> {
        let mut names = HashSet::new();
        for stream in &streams {
            if !names.insert(stream.name.as_str()) {
                return Err(Error::graph(format!(
                    "duplicate stream name '{}'",
                    stream.name
                )));
            }
        }

        let mut children = HashSet::new();
        for edge in &edges {
            for end in [&edge.parent, &edge.child] {
                if !names.contains(end.as_str()) {
                    return Err(Error::graph(format!(
                        "edge {} -> {} references unknown stream '{end}'",
                        edge.parent, edge.child
                    )));
                }
            }
            if !children.insert(edge.child.as_str()) {
                return Err(Error::graph(format!(
                    "stream '{}' has more than one parent",
                    edge.child
                )));
            }
        }

        let graph = Self { streams, edges };

        for stream in &graph.streams {
            let mut current = stream.name.as_str();
            let mut steps = 0;
            while let Some(edge) = graph.parent_of(current) {
                current = edge.parent.as_str();
                steps += 1;
                if steps > graph.streams.len() {
                    return Err(Error::graph(format!(
                        "cycle through stream '{}'",
                        stream.name
                    )));
                }
            }

            if graph.parent_of(&stream.name).is_none() && !stream.path_variables().is_empty() {
                return Err(Error::graph(format!(
                    "root stream '{}' has path variables but no parent to supply them",
                    stream.name
                )));
            }
        }

        Ok(graph)
    }

    /// All streams in declaration order
    pub fn streams(&self) -> &[StreamDescriptor] {
        &self.streams
    }

    /// Look up a stream by name
    pub fn get(&self, name: &str) -> Result<&StreamDescriptor> {
        self.streams
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::StreamNotFound {
                stream: name.to_string(),
            })
    }

    /// Streams without a parent, in declaration order
    pub fn roots(&self) -> impl Iterator<Item = &StreamDescriptor> {
        self.streams
            .iter()
            .filter(|s| self.parent_of(&s.name).is_none())
    }

    /// The edge feeding a stream, if it is a child
    pub fn parent_of(&self, name: &str) -> Option<&ParentEdge> {
        self.edges.iter().find(|e| e.child == name)
    }

    /// Edges leaving a stream
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ParentEdge> + 'a {
        self.edges.iter().filter(move |e| e.parent == name)
    }

    /// Names of every stream below `name`
    pub fn descendants(&self, name: &str) -> Vec<String> {
        let mut found = Vec::new();
        let mut stack = vec![name.to_string()];
        while let Some(current) = stack.pop() {
            for edge in self.children(&current) {
                found.push(edge.child.clone());
                stack.push(edge.child.clone());
            }
        }
        found
    }
}
