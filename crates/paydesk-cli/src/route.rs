//! # Route Commands
//!
//! Each command maps onto one resolver or registry operation and prints its
//! result. Structured results are printed as pretty JSON, bare paths as
//! plain lines.
//!
//! | Command                  | Operation                           |
//! |--------------------------|-------------------------------------|
//! | `resolve <target>`       | `handle_before_route`               |
//! | `parse <target>`         | `parse_route`                       |
//! | `prefix <path> <id>`     | `add_platform_prefix`               |
//! | `current`                | `get_platform`                      |
//! | `use <id>`               | `set_platform`                      |
//! | `platforms`              | `platform_selection_paths`          |
//! | `entry [id]`             | `platform_root_path` / `login_path` |

use std::io::Write;

use anyhow::{anyhow, Result};
use clap::Subcommand;
use serde::Serialize;

use paydesk_core::Platform;
use paydesk_router::PlatformRouteHandler;

/// Route resolution and platform selection commands.
#[derive(Subcommand, Debug)]
pub enum RouteCommand {
    /// Decide whether a navigation target proceeds or is redirected.
    ///
    /// Applies the navigation guard, so an explicit platform prefix becomes
    /// the active platform.
    Resolve {
        /// Navigation target, e.g. `/dashboard` or `/merchant/list?page=2`.
        target: String,
    },

    /// Split a target into its platform prefix and real path.
    Parse {
        /// Navigation target.
        target: String,
    },

    /// Put a path under a platform prefix, replacing any existing one.
    Prefix {
        /// Path to prefix.
        path: String,
        /// Platform identifier.
        platform: String,
    },

    /// Show the active platform.
    Current,

    /// Make a platform active.
    Use {
        /// Platform identifier.
        platform: String,
    },

    /// List the entry path of every configured platform.
    Platforms,

    /// Show the root and login paths of a platform.
    ///
    /// Without an argument, uses the active platform, else the default.
    Entry {
        /// Platform identifier.
        platform: Option<String>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CurrentPlatform {
    platform: Option<Platform>,
    label: Option<&'static str>,
    default_platform: Platform,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlatformPaths {
    root_path: String,
    login_path: String,
}

/// Execute a route command, writing its output to `out`.
pub fn run_route(
    command: &RouteCommand,
    routes: &PlatformRouteHandler,
    out: &mut dyn Write,
) -> Result<u8> {
    match command {
        RouteCommand::Resolve { target } => {
            let decision = routes.handle_before_route(target);
            tracing::info!(path = %target, ?decision, "resolved navigation target");
            print_json(out, &decision)?;
        }
        RouteCommand::Parse { target } => {
            print_json(out, &routes.parse_route(target))?;
        }
        RouteCommand::Prefix { path, platform } => {
            let platform = lookup_platform(routes, platform)?;
            writeln!(out, "{}", routes.registry().add_platform_prefix(path, platform))?;
        }
        RouteCommand::Current => {
            let registry = routes.registry();
            let platform = registry.get_platform();
            print_json(
                out,
                &CurrentPlatform {
                    platform,
                    label: platform.map(|p| p.label()),
                    default_platform: registry.default_platform(),
                },
            )?;
        }
        RouteCommand::Use { platform } => {
            let platform = lookup_platform(routes, platform)?;
            routes.registry().set_platform(platform);
            tracing::info!(%platform, "active platform switched");
            writeln!(out, "{}", routes.platform_root_path(Some(platform)))?;
        }
        RouteCommand::Platforms => {
            print_json(out, &routes.platform_selection_paths())?;
        }
        RouteCommand::Entry { platform } => {
            let platform = platform
                .as_deref()
                .map(|raw| lookup_platform(routes, raw))
                .transpose()?;
            print_json(
                out,
                &PlatformPaths {
                    root_path: routes.platform_root_path(platform),
                    login_path: routes.login_path(platform),
                },
            )?;
        }
    }
    Ok(0)
}

/// Resolve a platform identifier against the configured set.
fn lookup_platform(routes: &PlatformRouteHandler, raw: &str) -> Result<Platform> {
    let platforms = routes.registry().platforms();
    platforms.lookup(raw).ok_or_else(|| {
        let known: Vec<&str> = platforms.iter().map(|p| p.as_str()).collect();
        anyhow!("unknown platform {raw:?}; expected one of {}", known.join(", "))
    })
}

fn print_json(out: &mut dyn Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Arc;

    use crate::load_registry;

    fn routes_at(state_file: &Path) -> PlatformRouteHandler {
        PlatformRouteHandler::new(Arc::new(load_registry(None, Some(state_file)).unwrap()))
    }

    fn run(routes: &PlatformRouteHandler, command: RouteCommand) -> String {
        let mut out = Vec::new();
        let code = run_route(&command, routes, &mut out).unwrap();
        assert_eq!(code, 0);
        String::from_utf8(out).unwrap()
    }

    fn run_json(routes: &PlatformRouteHandler, command: RouteCommand) -> serde_json::Value {
        serde_json::from_str(&run(routes, command)).unwrap()
    }

    #[test]
    fn resolve_unprefixed_redirects_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let routes = routes_at(&dir.path().join("state.json"));

        let json = run_json(
            &routes,
            RouteCommand::Resolve {
                target: "/dashboard".to_string(),
            },
        );
        assert_eq!(json["needRedirect"], true);
        assert_eq!(json["redirectPath"], "/admin/dashboard");
    }

    #[test]
    fn resolve_prefixed_proceeds() {
        let dir = tempfile::tempdir().unwrap();
        let routes = routes_at(&dir.path().join("state.json"));

        let json = run_json(
            &routes,
            RouteCommand::Resolve {
                target: "/agent/orderManagement".to_string(),
            },
        );
        assert_eq!(json, serde_json::json!({"needRedirect": false}));
        assert_eq!(routes.registry().get_platform(), Some(Platform::Agent));
    }

    #[test]
    fn use_persists_across_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let state_file = dir.path().join("state.json");

        let first = routes_at(&state_file);
        let printed = run(
            &first,
            RouteCommand::Use {
                platform: "merchant".to_string(),
            },
        );
        assert_eq!(printed, "/merchant\n");

        let second = routes_at(&state_file);
        let json = run_json(
            &second,
            RouteCommand::Resolve {
                target: "/list?page=2".to_string(),
            },
        );
        assert_eq!(json["redirectPath"], "/merchant/list?page=2");

        let current = run_json(&second, RouteCommand::Current);
        assert_eq!(current["platform"], "merchant");
        assert_eq!(current["label"], "商户端");
    }

    #[test]
    fn current_without_selection() {
        let dir = tempfile::tempdir().unwrap();
        let routes = routes_at(&dir.path().join("state.json"));

        let json = run_json(&routes, RouteCommand::Current);
        assert!(json["platform"].is_null());
        assert!(json["label"].is_null());
        assert_eq!(json["defaultPlatform"], "admin");
    }

    #[test]
    fn parse_reports_platform_and_real_path() {
        let dir = tempfile::tempdir().unwrap();
        let routes = routes_at(&dir.path().join("state.json"));

        let json = run_json(
            &routes,
            RouteCommand::Parse {
                target: "/merchant/channelManagement/payInChannel".to_string(),
            },
        );
        assert_eq!(json["platform"], "merchant");
        assert_eq!(json["realPath"], "/channelManagement/payInChannel");

        let json = run_json(
            &routes,
            RouteCommand::Parse {
                target: "/unknown/x".to_string(),
            },
        );
        assert!(json["platform"].is_null());
        assert_eq!(json["realPath"], "/unknown/x");

        // Parsing is read-only.
        assert_eq!(routes.registry().get_platform(), None);
    }

    #[test]
    fn prefix_replaces_existing_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let routes = routes_at(&dir.path().join("state.json"));

        let printed = run(
            &routes,
            RouteCommand::Prefix {
                path: "/merchant/orderManagement".to_string(),
                platform: "agent".to_string(),
            },
        );
        assert_eq!(printed, "/agent/orderManagement\n");

        let printed = run(
            &routes,
            RouteCommand::Prefix {
                path: "/".to_string(),
                platform: "admin".to_string(),
            },
        );
        assert_eq!(printed, "/admin\n");
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let routes = routes_at(&dir.path().join("state.json"));

        let mut out = Vec::new();
        let err = run_route(
            &RouteCommand::Use {
                platform: "partner".to_string(),
            },
            &routes,
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("partner"));
        assert!(err.to_string().contains("admin, merchant, agent"));
        assert_eq!(routes.registry().get_platform(), None);
    }

    #[test]
    fn platforms_lists_login_paths() {
        let dir = tempfile::tempdir().unwrap();
        let routes = routes_at(&dir.path().join("state.json"));

        let json = run_json(&routes, RouteCommand::Platforms);
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2]["platform"], "agent");
        assert_eq!(entries[2]["path"], "/agent/auth/login");
        assert_eq!(entries[2]["label"], "代理端");
    }

    #[test]
    fn entry_falls_back_to_active_then_default() {
        let dir = tempfile::tempdir().unwrap();
        let routes = routes_at(&dir.path().join("state.json"));

        let json = run_json(&routes, RouteCommand::Entry { platform: None });
        assert_eq!(json["rootPath"], "/admin");
        assert_eq!(json["loginPath"], "/admin/auth/login");

        routes.registry().set_platform(Platform::Agent);
        let json = run_json(&routes, RouteCommand::Entry { platform: None });
        assert_eq!(json["rootPath"], "/agent");

        let json = run_json(
            &routes,
            RouteCommand::Entry {
                platform: Some("merchant".to_string()),
            },
        );
        assert_eq!(json["loginPath"], "/merchant/auth/login");
    }
}
