use std::collections::HashSet;

use super::Document;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

impl Document {
    /// Ensure the SVG namespace is declared exactly once, as the default
    /// namespace on the root element.
    ///
    /// Prefixes bound to the SVG namespace (e.g. `xmlns:svg`) are removed,
    /// along with their use on element and attribute names. Redundant default
    /// declarations of the SVG namespace below the root are dropped. Other
    /// namespaces (`xlink`, editor-specific, ...) are untouched.
    pub fn normalize_namespaces(&mut self) {
        let mut svg_prefixes = HashSet::new();
        self.root.visit_mut(|el, _| {
            for (k, v) in el.attrs().iter() {
                if let Some(prefix) = k.strip_prefix("xmlns:") {
                    if v == SVG_NAMESPACE {
                        svg_prefixes.insert(prefix.to_string());
                    }
                }
            }
        });

        let unprefix = |name: &str| -> Option<String> {
            let (prefix, local) = name.split_once(':')?;
            svg_prefixes.contains(prefix).then(|| local.to_string())
        };

        self.root.visit_mut(|el, depth| {
            el.attrs_mut().retain(|k, v| {
                let svg_prefix_decl = k
                    .strip_prefix("xmlns:")
                    .is_some_and(|p| svg_prefixes.contains(p));
                let nested_default = depth > 0 && k == "xmlns" && v == SVG_NAMESPACE;
                !(svg_prefix_decl || nested_default)
            });
            // `svg:width` and `width` on one element: the unprefixed one wins
            let shadowed: Vec<String> = el
                .attrs()
                .iter()
                .filter(|(k, _)| unprefix(k).is_some_and(|local| el.attrs().contains_key(&local)))
                .map(|(k, _)| k.to_string())
                .collect();
            for key in shadowed {
                el.attrs_mut().remove(&key);
            }
            el.attrs_mut().rename_keys(unprefix);
            if let Some(local) = unprefix(el.name()) {
                el.set_name(local);
            }
        });

        self.root.attrs_mut().insert_first("xmlns", SVG_NAMESPACE);
    }
}
