//! Several terminology adapters consulted in order

use async_trait::async_trait;
use std::sync::Arc;
use stepwise_application::{TerminologyError, TerminologyResolver};
use stepwise_domain::ValueSet;
use tracing::debug;

/// Tries each resolver in turn.
///
/// The first answer other than `NotFound` wins, errors included: a file
/// that exists but cannot be parsed is not papered over by a later adapter.
#[derive(Default)]
pub struct ChainedTerminology {
    resolvers: Vec<Arc<dyn TerminologyResolver>>,
}

impl ChainedTerminology {
    pub fn new(resolvers: Vec<Arc<dyn TerminologyResolver>>) -> Self {
        Self { resolvers }
    }

    pub fn with(mut self, resolver: Arc<dyn TerminologyResolver>) -> Self {
        self.resolvers.push(resolver);
        self
    }
}

#[async_trait]
impl TerminologyResolver for ChainedTerminology {
    async fn resolve(&self, reference: &str) -> Result<ValueSet, TerminologyError> {
        for (index, resolver) in self.resolvers.iter().enumerate() {
            match resolver.resolve(reference).await {
                Err(e) if e.is_not_found() => {
                    debug!("Resolver {} does not know {}", index, reference);
                }
                other => return other,
            }
        }
        Err(TerminologyError::NotFound(reference.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminology::ContainedValueSets;

    struct Failing;

    #[async_trait]
    impl TerminologyResolver for Failing {
        async fn resolve(&self, reference: &str) -> Result<ValueSet, TerminologyError> {
            Err(TerminologyError::Unavailable(reference.to_string()))
        }
    }

    fn contained(id: &str) -> Arc<dyn TerminologyResolver> {
        Arc::new(ContainedValueSets::new(vec![ValueSet::default().with_id(id)]))
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let chain = ChainedTerminology::new(vec![contained("a"), contained("b")]);
        assert_eq!(chain.resolve("#b").await.unwrap().id.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_errors_stop_the_chain() {
        let chain = ChainedTerminology::default()
            .with(Arc::new(Failing))
            .with(contained("a"));
        let err = chain.resolve("#a").await.unwrap_err();
        assert_eq!(err, TerminologyError::Unavailable("#a".to_string()));
    }

    #[tokio::test]
    async fn test_empty_chain_is_not_found() {
        let err = ChainedTerminology::default().resolve("#a").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
