//! Simple variable substitution renderer.

use strata_core::{
    application::ports::TemplateRenderer,
    domain::{RenderContext, TemplateKind},
};
use tracing::trace;

use crate::builtin_templates;

/// Renders the built-in bodies with `{{VARIABLE}}` substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    fn render(&self, kind: TemplateKind, context: &RenderContext) -> String {
        trace!(?kind, "rendering");
        context.render(builtin_templates::source(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::domain::{ArtifactKind, Identifier};

    fn id(s: &str) -> Identifier {
        Identifier::parse(s).unwrap()
    }

    fn ctx(feature: &str, name: &str) -> RenderContext {
        RenderContext::new(&id(feature), &id(name))
    }

    #[test]
    fn no_placeholder_survives() {
        let context = ctx("billing", "my_invoice").with_provider(&id("billing"));
        let renderer = SimpleRenderer::new();

        for artifact in ArtifactKind::ALL {
            for kind in artifact
                .templates()
                .iter()
                .copied()
                .chain([TemplateKind::Test(artifact)])
            {
                let out = renderer.render(kind, &context);
                assert!(!out.contains("{{"), "{kind:?} left a placeholder:\n{out}");
            }
        }
    }

    #[test]
    fn repository_impl_imports_its_interface() {
        let out = SimpleRenderer::new().render(TemplateKind::RepositoryImpl, &ctx("auth", "session"));
        assert!(out.starts_with("import '../../domain/repositories/session_repository.dart';"));
        assert!(out.contains("class SessionRepositoryImpl implements SessionRepository"));
    }

    #[test]
    fn provider_declares_camel_case_variable() {
        let out = SimpleRenderer::new().render(TemplateKind::Provider, &ctx("shop", "order_list"));
        assert!(out.contains("final orderListProvider ="));
        assert!(out.contains("class OrderListNotifier extends StateNotifier<OrderListState>"));
    }

    #[test]
    fn page_watches_selected_provider() {
        let context = ctx("shop", "order_list").with_provider(&id("shop"));
        let out = SimpleRenderer::new().render(TemplateKind::Page, &context);
        assert!(out.contains("import '../providers/shop_provider.dart';"));
        assert!(out.contains("ref.watch(shopProvider)"));
        assert!(out.contains("class OrderListPage extends ConsumerWidget"));
    }

    #[test]
    fn test_stubs_name_their_kind() {
        let out = SimpleRenderer::new()
            .render(TemplateKind::Test(ArtifactKind::Page), &ctx("a", "b"));
        assert_eq!(out, "// TODO: write page widget tests\n");
    }
}
