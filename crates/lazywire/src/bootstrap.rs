//! Context bootstrap
//!
//! Wires configuration into a ready [`ServiceContext`]. Building a context
//! constructs no services - every slot stays empty until first access, which
//! is what lets mutually referencing contexts be built in any order.

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::context::{ContextParams, ServiceContext};
use crate::resolver::ServiceResolver;

/// Build a service context from application configuration
pub fn build_context(config: AppConfig) -> ServiceContext {
    info!(
        "Building service context '{}' (tools={}, store={})",
        config.context.name, config.providers.tools.provider, config.providers.store.provider
    );

    let params = ContextParams {
        name: config.context.name.clone(),
        max_results: config.context.max_results,
    };

    let config = Arc::new(config);
    let resolver = ServiceResolver::new(config);

    ServiceContext::new(params, resolver)
}
