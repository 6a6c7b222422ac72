//! The registry files a scaffold run maintains, and the fragments it adds.

use super::{InsertionRequest, Placement, RegistryFile, RegistryPatch, Wrapper};
use crate::domain::{layout::ProjectLayout, value_objects::Identifier};

/// New route imports go directly above this line.
pub const IMPORTS_MARKER: &str = "// AUTO_IMPORTS";

/// New routes go directly above this line.
pub const ROUTES_MARKER: &str = "// AUTO_ROUTES";

/// Opening of the route list, used when the routes marker has been removed.
pub const ROUTES_TOKEN: &str = "routes: [";

pub const ROUTER_BOOTSTRAP: &str = "\
import 'package:flutter/material.dart';
import 'package:go_router/go_router.dart';

// AUTO_IMPORTS

final GoRouter router = GoRouter(
  routes: [
    // AUTO_ROUTES
  ],
);
";

pub const PAGE_NAMES_BOOTSTRAP: &str = "// AUTO_GENERATED – do not edit manually.\n\n";

/// Written once; never merged into.
pub const INJECTION_CONTAINER: &str = "// Dependency injection setup\n";

/// `/<page>` for a feature's main page, `/<feature>/<page>` otherwise.
pub fn route_path(feature: &Identifier, page: &Identifier) -> String {
    if feature == page {
        format!("/{page}")
    } else {
        format!("/{feature}/{page}")
    }
}

/// `my_page` → `kMyPagePage`.
pub fn page_constant(page: &Identifier) -> String {
    format!("k{}Page", page.pascal())
}

fn router_file(layout: &ProjectLayout) -> RegistryFile {
    RegistryFile {
        path: layout.router(),
        bootstrap: ROUTER_BOOTSTRAP.to_string(),
    }
}

fn page_names_file(layout: &ProjectLayout) -> RegistryFile {
    RegistryFile {
        path: layout.page_names(),
        bootstrap: PAGE_NAMES_BOOTSTRAP.to_string(),
    }
}

/// Import the page and add its route to the router.
pub fn route_registration(
    layout: &ProjectLayout,
    feature: &Identifier,
    page: &Identifier,
) -> RegistryPatch {
    let path = route_path(feature, page);

    let import = InsertionRequest::new(
        "route import",
        format!("import '../features/{feature}/presentation/pages/{page}_page.dart';"),
    )
    .then(Placement::before_marker(IMPORTS_MARKER))
    .then(Placement::after_last_statement("import ", ";"))
    .then(Placement::prepend());

    let route = InsertionRequest::new(
        "route",
        format!(
            "    GoRoute(path: '{path}', builder: (context, state) => {}Page()),",
            page.pascal()
        ),
    )
    .dedup_on(format!("path: '{path}'"))
    .then(Placement::before_marker(ROUTES_MARKER))
    .then(Placement::after_token(ROUTES_TOKEN))
    .then(Placement::append_wrapped(Wrapper::new(
        "final GoRouter router = GoRouter(\n  routes: [\n",
        "  ],\n);\n",
    )));

    RegistryPatch {
        file: router_file(layout),
        requests: vec![import, route],
    }
}

/// Declare the page-name constant.
pub fn page_name_registration(layout: &ProjectLayout, page: &Identifier) -> RegistryPatch {
    let constant = page_constant(page);

    let declaration = InsertionRequest::new(
        "page name",
        format!("const {constant} = '{page}';"),
    )
    .dedup_on(format!("const {constant} "))
    .then(Placement::append());

    RegistryPatch {
        file: page_names_file(layout),
        requests: vec![declaration],
    }
}
