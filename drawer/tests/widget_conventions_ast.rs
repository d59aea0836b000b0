use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

#[test]
fn given_widget_modules_when_validating_conventions_then_all_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse_source_file(&mod_rs);
    for item in &mod_file.items {
        if let Item::Mod(item_mod) = item {
            if !is_pub_crate(&item_mod.vis) || item_mod.content.is_some() {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }
    }

    let mut widget_dirs = Vec::new();
    let entries = fs::read_dir(&widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", widgets_dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let file_type = entry.file_type().unwrap_or_else(|err| {
            panic!(
                "failed to read file type for {}: {err}",
                entry.path().display()
            )
        });
        if file_type.is_dir() {
            widget_dirs.push(entry.path());
        }
    }
    assert!(
        !widget_dirs.is_empty(),
        "no widget modules found under {}",
        widgets_dir.display()
    );

    for dir in &widget_dirs {
        for required in ["mod.rs", "event.rs", "reducer.rs"] {
            if !dir.join(required).is_file() {
                violations
                    .push(format!("{}: missing {required}", dir.display()));
            }
        }
        collect_glob_import_violations(dir, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn collect_glob_import_violations(dir: &Path, violations: &mut Vec<String>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();

        if path.is_dir() {
            collect_glob_import_violations(&path, violations);
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let file = parse_source_file(&path);
        for item in &file.items {
            if let Item::Use(item_use) = item {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        path.display()
                    ));
                }
            }
        }
    }
}

fn parse_source_file(path: &Path) -> syn::File {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });

    syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => restricted.path.is_ident("crate"),
        _ => false,
    }
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}
