//! Built-in Dart template bodies.
//!
//! Each body is a fixed string with `{{VARIABLE}}` placeholders filled from a
//! [`RenderContext`](strata_core::domain::RenderContext). The target project
//! uses a Riverpod `StateNotifier` per provider and one `ConsumerWidget` per
//! page.

use strata_core::domain::{ArtifactKind, TemplateKind};

// ── Domain layer ──────────────────────────────────────────────────────────────

const ENTITY: &str = "\
class {{NAME_PASCAL}} {
  final int id;
  {{NAME_PASCAL}}(this.id);
}
";

const USECASE: &str = "\
class {{NAME_PASCAL}} {
  Future<void> call() async {
    // TODO: implement usecase
  }
}
";

const REPOSITORY: &str = "\
abstract class {{NAME_PASCAL}}Repository {
  // TODO: define repository methods
}
";

// ── Data layer ────────────────────────────────────────────────────────────────

const REPOSITORY_IMPL: &str = "\
import '../../domain/repositories/{{NAME}}_repository.dart';

class {{NAME_PASCAL}}RepositoryImpl implements {{NAME_PASCAL}}Repository {
  // TODO: implement methods
}
";

const DATASOURCE: &str = "\
abstract class {{NAME_PASCAL}}DataSource {
  // TODO: define data source methods
}

class {{NAME_PASCAL}}DataSourceImpl implements {{NAME_PASCAL}}DataSource {
  // TODO: implement data source
}
";

// ── Presentation layer ────────────────────────────────────────────────────────

const PROVIDER: &str = "\
import 'package:flutter_riverpod/flutter_riverpod.dart';

// State
class {{NAME_PASCAL}}State {
  final bool isLoading;
  final String? error;

  {{NAME_PASCAL}}State({this.isLoading = false, this.error});

  {{NAME_PASCAL}}State copyWith({bool? isLoading, String? error}) {
    return {{NAME_PASCAL}}State(
      isLoading: isLoading ?? this.isLoading,
      error: error ?? this.error,
    );
  }
}

// Notifier
class {{NAME_PASCAL}}Notifier extends StateNotifier<{{NAME_PASCAL}}State> {
  {{NAME_PASCAL}}Notifier() : super({{NAME_PASCAL}}State());

  Future<void> exampleAction() async {
    state = state.copyWith(isLoading: true);
    await Future.delayed(const Duration(seconds: 1));
    state = state.copyWith(isLoading: false);
  }
}

// Provider
final {{NAME_CAMEL}}Provider =
    StateNotifierProvider<{{NAME_PASCAL}}Notifier, {{NAME_PASCAL}}State>(
        (ref) => {{NAME_PASCAL}}Notifier());
";

const PAGE: &str = "\
import 'package:flutter/material.dart';
import 'package:flutter_riverpod/flutter_riverpod.dart';
import '../providers/{{PROVIDER}}_provider.dart';

class {{NAME_PASCAL}}Page extends ConsumerWidget {
  const {{NAME_PASCAL}}Page({super.key});

  @override
  Widget build(BuildContext context, WidgetRef ref) {
    final state = ref.watch({{PROVIDER_CAMEL}}Provider);
    return Scaffold(
      appBar: AppBar(title: const Text('{{NAME_PASCAL}}')),
      body: Center(
        child: state.isLoading
            ? const CircularProgressIndicator()
            : const Text('{{NAME_PASCAL}} Page'),
      ),
    );
  }
}
";

// ── Test stubs ────────────────────────────────────────────────────────────────

fn test_stub(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Entity => "// TODO: write entity tests\n",
        ArtifactKind::Usecase => "// TODO: write usecase tests\n",
        ArtifactKind::Repository => "// TODO: write repository tests\n",
        ArtifactKind::Datasource => "// TODO: write datasource tests\n",
        ArtifactKind::Provider => "// TODO: write provider tests\n",
        ArtifactKind::Page => "// TODO: write page widget tests\n",
    }
}

/// Unrendered body for `kind`.
pub fn source(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Entity => ENTITY,
        TemplateKind::Usecase => USECASE,
        TemplateKind::Repository => REPOSITORY,
        TemplateKind::RepositoryImpl => REPOSITORY_IMPL,
        TemplateKind::Datasource => DATASOURCE,
        TemplateKind::Provider => PROVIDER,
        TemplateKind::Page => PAGE,
        TemplateKind::Test(artifact) => test_stub(artifact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_kind() -> Vec<TemplateKind> {
        ArtifactKind::ALL
            .iter()
            .flat_map(|k| k.templates().iter().copied().chain([TemplateKind::Test(*k)]))
            .collect()
    }

    #[test]
    fn every_body_ends_with_newline() {
        for kind in every_kind() {
            assert!(source(kind).ends_with('\n'), "{kind:?}");
        }
    }

    #[test]
    fn page_only_uses_provider_variables() {
        for kind in every_kind() {
            let uses_provider = source(kind).contains("{{PROVIDER");
            assert_eq!(uses_provider, kind == TemplateKind::Page, "{kind:?}");
        }
    }
}
