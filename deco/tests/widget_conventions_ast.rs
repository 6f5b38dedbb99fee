use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

#[test]
fn given_primitives_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let primitives_dir = manifest_dir.join("src/components/primitive");
    let mod_rs = primitives_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod) => {
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                    declared_modules.insert(item_mod.ident.to_string());
                } else {
                    violations.push(format!(
                        "{}: module declaration '{}' must be pub(crate) mod <name>;",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    let fs_modules = rust_file_stems(&primitives_dir, &mut violations);
    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match file modules {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        let file_path = primitives_dir.join(format!("{module}.rs"));
        validate_primitive_file(&file_path, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "primitive convention violations:\n{}",
        violations.join("\n")
    );
}

fn parse(path: &Path) -> syn::File {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn rust_file_stems(dir: &Path, violations: &mut Vec<String>) -> BTreeSet<String> {
    let mut stems = BTreeSet::new();
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();

        if path.is_dir() {
            violations.push(format!(
                "{}: nested primitive directories are forbidden",
                path.display()
            ));
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let stem = path
            .file_stem()
            .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
            .to_string_lossy()
            .to_string();
        if stem != "mod" {
            stems.insert(stem);
        }
    }
    stems
}

fn validate_primitive_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    let file = parse(file_path);
    let expected_prefix = file_stem_pascal_case(file_path);

    for forbidden in [
        "crate::app::",
        "crate::store::",
        "crate::services::",
        "crate::widgets::",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: primitives must not depend on {forbidden}",
                file_path.display()
            ));
        }
    }
    for forbidden in ["log::", "std::fs::", "open::", "Task::", "iced::Task"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();
    let mut event_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Enum(item_enum) => {
                let name = item_enum.ident.to_string();
                if name.ends_with("Event") {
                    event_names.push(name);
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }
    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }
    if event_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Event contract, found {}",
            file_path.display(),
            event_names.len()
        ));
    }

    for name in props_names.iter().chain(event_names.iter()) {
        if !name.starts_with(&expected_prefix) {
            violations.push(format!(
                "{}: '{name}' must start with file prefix '{expected_prefix}'",
                file_path.display()
            ));
        }
    }
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();

    stem.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
