use crate::{errors::GraphError, graph::ComponentGraph};

/// Upper bound of visits while ordering a graph.
///
/// Exceeding it is treated as a circular reference or an oversized graph.
pub const MAX_VISITS: usize = 1000;

/// Order in which the components reachable from a root have to be built
///
/// Stored in visit order: a component always appears before everything it references.
/// Construction walks the plan backwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionPlan {
    order: Vec<String>,
}

impl ConstructionPlan {
    /// Computes the plan for `root`
    ///
    /// Depth first, in argument order. A component that is reached again
    /// is moved to the end of the order, behind every component referencing it.
    pub fn compute(graph: &ComponentGraph, root: &str) -> Result<Self, GraphError> {
        Self::compute_with_limit(graph, root, MAX_VISITS)
    }

    pub fn compute_with_limit(
        graph: &ComponentGraph,
        root: &str,
        limit: usize,
    ) -> Result<Self, GraphError> {
        if !graph.contains(root) {
            return Err(GraphError::MissingRoot(root.to_string()));
        }

        let mut analyzer = Analyzer {
            graph,
            limit,
            visits: 0,
            order: Vec::new(),
            chain: Vec::new(),
        };
        analyzer.visit(root, None)?;

        tracing::debug!(
            "Ordered {} components for '{}' in {} visits",
            analyzer.order.len(),
            root,
            analyzer.visits
        );

        Ok(Self {
            order: analyzer.order,
        })
    }

    /// Names in visit order, the root first
    pub fn visit_order(&self) -> &[String] {
        &self.order
    }

    /// Names in the order they have to be constructed, the root last
    pub fn construction_order(&self) -> impl Iterator<Item = &str> {
        self.order.iter().rev().map(String::as_str)
    }

    pub fn root(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.order.iter().any(|entry| entry == name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

struct Analyzer<'a> {
    graph: &'a ComponentGraph,
    limit: usize,
    visits: usize,
    order: Vec<String>,
    /// Current path from the root, used for error reporting
    chain: Vec<String>,
}

impl Analyzer<'_> {
    fn visit(&mut self, name: &str, required_by: Option<&str>) -> Result<(), GraphError> {
        self.chain.push(name.to_string());

        self.visits += 1;
        if self.visits > self.limit {
            return Err(self.limit_exceeded());
        }

        let graph = self.graph;
        let Some(spec) = graph.get(name) else {
            return Err(match required_by {
                Some(required_by) => GraphError::MissingDependency {
                    dependency: name.to_string(),
                    required_by: required_by.to_string(),
                },
                None => GraphError::MissingRoot(name.to_string()),
            });
        };

        // Promote: the component moves behind everything that referenced it so far
        if let Some(existing) = self.order.iter().position(|entry| entry == name) {
            self.order.remove(existing);
        }
        self.order.push(name.to_string());

        for dependency in spec.references() {
            self.visit(dependency, Some(name))?;
        }

        self.chain.pop();
        Ok(())
    }

    fn limit_exceeded(&self) -> GraphError {
        let cycle = self.chain.split_last().and_then(|(last, before)| {
            before
                .iter()
                .rposition(|name| name == last)
                .map(|start| self.chain[start..].to_vec())
        });

        tracing::error!(
            "Visit limit of {} exceeded while ordering dependencies",
            self.limit
        );

        GraphError::VisitLimitExceeded {
            limit: self.limit,
            chain: self.chain.clone(),
            cycle,
        }
    }
}
