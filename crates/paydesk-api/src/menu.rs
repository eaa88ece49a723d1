//! # Route Menu
//!
//! The console's route-menu table: one record per management module, each
//! with its child pages. Paths here are real (unprefixed) paths; the same
//! table serves every platform.
//!
//! | Module              | Children                                  |
//! |---------------------|-------------------------------------------|
//! | `merchantManagement`| (no children)                             |
//! | `channelManagement` | `payInChannel`, `payInChannelMerchant`    |
//! | `productManagement` | `payInProduct`                            |
//! | `agentManagement`   | `payInAgent`                              |
//! | `orderManagement`   | `payInOrder`, `payOutOrder`               |

use serde::Serialize;

const MANAGER_ROLES: &[&str] = &["R_SUPER", "R_ADMIN"];

/// A child page whose component and title key derive from `<module>/<path>`.
macro_rules! page {
    ($name:literal, $module:literal, $path:literal) => {
        page(
            $name,
            $path,
            concat!("/", $module, "/", $path),
            concat!("menus.", $module, ".", $path),
        )
    };
}

/// Menu metadata attached to a route record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    /// i18n key of the menu title.
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    /// Roles allowed to see the entry. Empty means inherited from the parent.
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub roles: &'static [&'static str],
    pub keep_alive: bool,
    pub fixed_tab: bool,
}

/// A route record. Top-level records have absolute paths; children have
/// paths relative to their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRecord {
    pub name: &'static str,
    pub path: &'static str,
    pub component: &'static str,
    pub meta: RouteMeta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteRecord>,
}

/// A record matched against a real path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuMatch<'a> {
    /// The absolute real path of the matched record.
    pub full_path: String,
    /// The matched record.
    pub route: &'a RouteRecord,
}

/// The full route-menu table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteMenu {
    modules: Vec<RouteRecord>,
}

impl RouteMenu {
    /// The table the console ships with.
    pub fn builtin() -> Self {
        Self {
            modules: vec![
                module(
                    "MerchantManagement",
                    "/merchantManagement",
                    "menus.merchantManagement.title",
                    "ri:account-box-2-line",
                    vec![],
                ),
                module(
                    "ChannelManagement",
                    "/channelManagement",
                    "menus.channelManagement.title",
                    "ri:archive-drawer-line",
                    vec![
                        page!("PayInChannel", "channelManagement", "payInChannel"),
                        page!("PayInChannelMerchant", "channelManagement", "payInChannelMerchant"),
                    ],
                ),
                module(
                    "ProductManagement",
                    "/productManagement",
                    "menus.productManagement.title",
                    "ri:article-line",
                    vec![page!("PayInProduct", "productManagement", "payInProduct")],
                ),
                module(
                    "AgentManagement",
                    "/agentManagement",
                    "menus.agentManagement.title",
                    "ri:contacts-book-line",
                    vec![page!("PayInAgent", "agentManagement", "payInAgent")],
                ),
                module(
                    "OrderManagement",
                    "/orderManagement",
                    "menus.orderManagement.title",
                    "ri:file-list-3-line",
                    vec![
                        page!("PayInOrder", "orderManagement", "payInOrder"),
                        page!("PayOutOrder", "orderManagement", "payOutOrder"),
                    ],
                ),
            ],
        }
    }

    /// Top-level modules in menu order.
    pub fn modules(&self) -> &[RouteRecord] {
        &self.modules
    }

    /// Match a real path (query ignored, trailing `/` tolerated) against the
    /// table: `/<module>` or `/<module>/<child>`.
    pub fn resolve(&self, real_path: &str) -> Option<MenuMatch<'_>> {
        let path = real_path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let module_segment = segments.next()?;
        let child_segment = segments.next();
        if segments.next().is_some() {
            return None;
        }

        let module = self
            .modules
            .iter()
            .find(|m| m.path.trim_start_matches('/') == module_segment)?;

        match child_segment {
            None => Some(MenuMatch {
                full_path: module.path.to_string(),
                route: module,
            }),
            Some(child_segment) => {
                let child = module.children.iter().find(|c| c.path == child_segment)?;
                Some(MenuMatch {
                    full_path: format!("{}/{}", module.path, child.path),
                    route: child,
                })
            }
        }
    }
}

fn module(
    name: &'static str,
    path: &'static str,
    title: &'static str,
    icon: &'static str,
    children: Vec<RouteRecord>,
) -> RouteRecord {
    RouteRecord {
        name,
        path,
        component: "/index/index",
        meta: RouteMeta {
            title,
            icon: Some(icon),
            roles: MANAGER_ROLES,
            keep_alive: false,
            fixed_tab: false,
        },
        children,
    }
}

fn page(
    name: &'static str,
    path: &'static str,
    component: &'static str,
    title: &'static str,
) -> RouteRecord {
    RouteRecord {
        name,
        path,
        component,
        meta: RouteMeta {
            title,
            icon: None,
            roles: &[],
            keep_alive: false,
            fixed_tab: true,
        },
        children: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_five_modules() {
        let menu = RouteMenu::builtin();
        let names: Vec<&str> = menu.modules().iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "MerchantManagement",
                "ChannelManagement",
                "ProductManagement",
                "AgentManagement",
                "OrderManagement"
            ]
        );
    }

    #[test]
    fn child_component_and_title_follow_module() {
        let menu = RouteMenu::builtin();
        let m = menu.resolve("/orderManagement/payOutOrder").unwrap();
        assert_eq!(m.full_path, "/orderManagement/payOutOrder");
        assert_eq!(m.route.name, "PayOutOrder");
        assert_eq!(m.route.component, "/orderManagement/payOutOrder");
        assert_eq!(m.route.meta.title, "menus.orderManagement.payOutOrder");
        assert!(m.route.meta.fixed_tab);
    }

    #[test]
    fn resolves_module() {
        let menu = RouteMenu::builtin();
        let m = menu.resolve("/merchantManagement/").unwrap();
        assert_eq!(m.full_path, "/merchantManagement");
        assert_eq!(m.route.component, "/index/index");
        assert_eq!(m.route.meta.roles, &["R_SUPER", "R_ADMIN"]);
    }

    #[test]
    fn ignores_query() {
        let menu = RouteMenu::builtin();
        let m = menu.resolve("/channelManagement/payInChannel?page=2").unwrap();
        assert_eq!(m.route.name, "PayInChannel");
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        let menu = RouteMenu::builtin();
        assert!(menu.resolve("/").is_none());
        assert!(menu.resolve("/dashboard").is_none());
        assert!(menu.resolve("/orderManagement/refunds").is_none());
        assert!(menu.resolve("/orderManagement/payInOrder/extra").is_none());
        assert!(menu.resolve("/merchantManagement/console").is_none());
    }

    #[test]
    fn serializes_camel_case_and_skips_empty() {
        let menu = RouteMenu::builtin();
        let json = serde_json::to_value(&menu).unwrap();
        assert_eq!(json[0]["name"], "MerchantManagement");
        assert!(json[0].get("children").is_none());
        assert_eq!(json[1]["children"][0]["meta"]["fixedTab"], true);
        assert!(json[1]["children"][0]["meta"].get("roles").is_none());
        assert!(json[1]["children"][0]["meta"].get("icon").is_none());
    }
}
