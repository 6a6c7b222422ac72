//! Integration tests for strata-cli.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

/// `strata` running in `dir`, isolated from the user's config and env.
fn strata(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("strata");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .env_remove("STRATA__LAYOUT__SOURCE_DIR")
        .env_remove("STRATA__LAYOUT__TEST_DIR")
        .env_remove("STRATA__PROJECT__ROOT");
    cmd
}

fn snapshot(root: &Path) -> BTreeMap<PathBuf, String> {
    fn walk(dir: &Path, root: &Path, out: &mut BTreeMap<PathBuf, String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_path_buf();
                out.insert(rel, fs::read_to_string(&path).unwrap());
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap_or_else(|e| panic!("{rel}: {e}"))
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_help_lists_every_kind() {
    let temp = TempDir::new().unwrap();
    let output = strata(temp.path()).args(["new", "--help"]).output().unwrap();
    assert!(output.status.success());

    let help = String::from_utf8(output.stdout).unwrap();
    for kind in [
        "feature",
        "page",
        "provider",
        "entity",
        "usecase",
        "repository",
        "datasource",
    ] {
        assert!(help.contains(kind), "{kind} missing from:\n{help}");
    }
}

// ── new feature ───────────────────────────────────────────────────────────────

#[test]
fn test_new_feature_success() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    strata(root)
        .args(["new", "feature", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    for dir in [
        "lib/core/error",
        "lib/core/usecases",
        "lib/core/utils",
        "lib/features/billing/data/models",
        "lib/features/billing/presentation/widgets",
        "test/features/billing",
    ] {
        assert!(root.join(dir).is_dir(), "missing {dir}");
    }

    let entity = read(root, "lib/features/billing/domain/entities/billing.dart");
    assert!(entity.contains("class Billing {"));

    let page = read(root, "lib/features/billing/presentation/pages/billing_page.dart");
    assert!(page.contains("class BillingPage extends ConsumerWidget"));
    assert!(page.contains("ref.watch(billingProvider)"));

    let router = read(root, "lib/core/router.dart");
    assert!(router.contains("GoRoute(path: '/billing'"));

    let names = read(root, "lib/core/page_names.dart");
    assert!(names.contains("const kBillingPage = 'billing';"));

    assert_eq!(
        read(root, "lib/injection_container.dart"),
        "// Dependency injection setup\n"
    );
}

#[test]
fn test_new_feature_twice_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    strata(root).args(["new", "feature", "billing"]).assert().success();
    let first = snapshot(root);

    strata(root)
        .args(["new", "feature", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 created"));

    assert_eq!(snapshot(root), first);
}

#[test]
fn test_feature_name_is_case_folded() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["new", "feature", "  Billing "])
        .assert()
        .success();
    assert!(temp.path().join("lib/features/billing").is_dir());
}

#[test]
fn test_hand_edited_file_survives() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let entity = root.join("lib/features/billing/domain/entities/billing.dart");
    fs::create_dir_all(entity.parent().unwrap()).unwrap();
    fs::write(&entity, "// mine\n").unwrap();

    strata(root)
        .args(["new", "feature", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exists"));

    assert_eq!(fs::read_to_string(&entity).unwrap(), "// mine\n");
}

// ── new <kind> ────────────────────────────────────────────────────────────────

#[test]
fn test_new_page_twice_registers_once() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    for _ in 0..2 {
        strata(root)
            .args(["new", "page", "billing", "invoices"])
            .assert()
            .success();
    }

    let router = read(root, "lib/core/router.dart");
    assert_eq!(router.matches("path: '/billing/invoices'").count(), 1);
    assert_eq!(
        router
            .matches("import '../features/billing/presentation/pages/invoices_page.dart';")
            .count(),
        1
    );

    let names = read(root, "lib/core/page_names.dart");
    assert_eq!(names.matches("const kInvoicesPage ").count(), 1);

    assert!(root.join("test/features/billing/invoices_page_test.dart").is_file());
}

#[test]
fn test_page_merges_into_hand_written_router() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("lib/core")).unwrap();
    fs::write(
        root.join("lib/core/router.dart"),
        "import 'package:go_router/go_router.dart';\n\
         import '../home.dart';\n\
         \n\
         final router = GoRouter(\n\
         \x20 routes: [\n\
         \x20   GoRoute(path: '/', builder: (context, state) => HomePage()),\n\
         \x20 ],\n\
         );\n",
    )
    .unwrap();

    strata(root)
        .args(["new", "page", "shop", "cart"])
        .assert()
        .success();

    let router = read(root, "lib/core/router.dart");
    assert!(router.contains("GoRoute(path: '/', builder: (context, state) => HomePage()),"));
    assert!(router.contains("path: '/shop/cart'"));
    let import = router
        .find("import '../features/shop/presentation/pages/cart_page.dart';")
        .unwrap();
    assert!(import < router.find("final router").unwrap());
}

#[test]
fn test_new_repository_writes_interface_and_impl() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    strata(root)
        .args(["new", "repository", "auth", "session"])
        .assert()
        .success();

    assert!(
        read(root, "lib/features/auth/domain/repositories/session_repository.dart")
            .contains("abstract class SessionRepository")
    );
    assert!(
        read(root, "lib/features/auth/data/repositories/session_repository_impl.dart")
            .contains("class SessionRepositoryImpl implements SessionRepository")
    );
    assert!(!root.join("lib/core/router.dart").exists());
}

#[test]
fn test_page_uses_its_own_provider_when_present() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    strata(root)
        .args(["new", "provider", "shop", "cart"])
        .assert()
        .success();
    strata(root)
        .args(["new", "page", "shop", "cart"])
        .assert()
        .success();

    let page = read(root, "lib/features/shop/presentation/pages/cart_page.dart");
    assert!(page.contains("ref.watch(cartProvider)"));
}

// ── output formats ────────────────────────────────────────────────────────────

#[test]
fn test_json_output_is_the_report() {
    let temp = TempDir::new().unwrap();
    let output = strata(temp.path())
        .args(["--output-format", "json", "new", "entity", "shop", "item"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = report["entries"].as_array().unwrap();
    assert!(entries.iter().any(|e| {
        e["action"] == "created" && e["path"] == "lib/features/shop/domain/entities/item.dart"
    }));
}

#[test]
fn test_quiet_prints_nothing() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["-q", "new", "usecase", "shop", "checkout"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(
        temp.path()
            .join("lib/features/shop/domain/usecases/checkout.dart")
            .is_file()
    );
}

// ── root and layout ───────────────────────────────────────────────────────────

#[test]
fn test_root_flag() {
    let temp = TempDir::new().unwrap();
    let app = temp.path().join("app");
    fs::create_dir(&app).unwrap();

    strata(temp.path())
        .args(["-C", "app", "new", "datasource", "shop", "remote"])
        .assert()
        .success();

    assert!(app.join("lib/features/shop/data/datasources/remote_datasource.dart").is_file());
    assert!(!temp.path().join("lib").exists());
}

#[test]
fn test_local_config_moves_layout() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(
        root.join(".strata.toml"),
        "[layout]\nsource_dir = \"app/lib\"\ntest_dir = \"app/test\"\n",
    )
    .unwrap();

    strata(root)
        .args(["new", "page", "shop", "cart"])
        .assert()
        .success();

    assert!(root.join("app/lib/features/shop/presentation/pages/cart_page.dart").is_file());
    assert!(root.join("app/test/features/shop/cart_page_test.dart").is_file());
    assert!(root.join("app/lib/core/router.dart").is_file());
}

#[test]
fn test_env_overrides_layout() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .env("STRATA__LAYOUT__SOURCE_DIR", "src")
        .args(["config", "get", "layout.source_dir"])
        .assert()
        .success()
        .stdout("src\n");
}

// ── init / config / completions ───────────────────────────────────────────────

#[test]
fn test_init_then_config_list() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    strata(root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(read(root, ".strata.toml").contains("source_dir = \"lib\""));

    strata(root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    strata(root)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[layout]"))
        .stdout(predicate::str::contains("test_dir = \"test\""));
}

#[test]
fn test_config_get_and_path() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["config", "get", "layout.test_dir"])
        .assert()
        .success()
        .stdout("test\n");

    strata(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"));
}
