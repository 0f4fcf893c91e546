use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{
    page::{Click, StaticPage},
    platform::SignalSource,
    router::{Activation, Host, LinkState, Routing, ids, initialize},
    runtime::Runtime,
};

use super::config::Config;

/// Host that reports navigations and notices on stdout.
pub struct ConsoleHost;

impl Host for ConsoleHost {
    fn navigate(&self, uri: &str) {
        println!("  -> navigate: {}", uri);
    }

    fn notify(&self, message: &str) {
        println!("  -> notice: {}", message);
    }
}

/// Route the landing page and optionally simulate clicks on its elements
#[tracing::instrument(skip(runtime, catalog_path, source))]
pub fn route<R: Runtime, S: SignalSource + ?Sized>(
    runtime: R,
    catalog_path: Option<PathBuf>,
    source: &S,
    clicks: &[String],
) -> Result<()> {
    let config = Config::new(&runtime, catalog_path)?;
    let signals = source.signals();

    let mut page = StaticPage::landing();
    let routing = initialize(&mut page, &config.catalog, &signals)?;
    print_routing(&routing);

    for element in clicks {
        debug!("Simulating click on {}", element);
        println!("\nclick {}", element);
        let click = page.click(resolve_element(element), &ConsoleHost)?;
        print_click(&click);
    }

    Ok(())
}

/// Accept `primary` and platform keys as shorthands for element ids.
fn resolve_element(name: &str) -> &str {
    match name {
        "primary" => ids::PRIMARY_ACTION,
        other => match other.parse() {
            Ok(platform) => ids::platform_link(platform),
            Err(_) => other,
        },
    }
}

fn describe(state: &LinkState) -> String {
    match state {
        LinkState::Available(uri) => uri.clone(),
        LinkState::Pending => "(not yet available)".to_string(),
    }
}

fn print_routing(routing: &Routing) {
    println!("Detected platform: {}", routing.platform);
    println!("Primary label: {}", routing.label);
    println!(
        "{:<18} {}",
        ids::PRIMARY_ACTION,
        describe(&routing.primary.state)
    );
    for link in &routing.links {
        println!("{:<18} {}", link.element, describe(&link.state));
    }
}

fn print_click(click: &Click) {
    match (&click.activation, &click.followed_href) {
        (Some(Activation::Notified(platform)), _) => {
            println!("  (navigation suppressed, {} pending)", platform)
        }
        (Some(Activation::Navigated(_)), _) | (None, Some(_)) => {}
        (None, None) => println!("  (no effect)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Signals;
    use crate::runtime::MockRuntime;

    #[test]
    fn test_resolve_element_shorthands() {
        assert_eq!(resolve_element("primary"), ids::PRIMARY_ACTION);
        assert_eq!(resolve_element("mac"), ids::MACOS_LINK);
        assert_eq!(resolve_element("linux"), ids::LINUX_LINK);
        assert_eq!(resolve_element("download-windows"), ids::WINDOWS_LINK);
        assert_eq!(resolve_element("something-else"), "something-else");
    }

    #[test]
    fn test_route_with_builtin_catalog() {
        let mut runtime = MockRuntime::new();
        runtime.expect_config_dir().returning(|| None);
        runtime
            .expect_env_var()
            .returning(|_| Err(std::env::VarError::NotPresent));

        route(
            runtime,
            None,
            &Signals::new("Linux x86_64", ""),
            &["primary".to_string(), "macos".to_string()],
        )
        .unwrap();
    }

    #[test]
    fn test_route_click_on_unknown_element_fails() {
        let mut runtime = MockRuntime::new();
        runtime.expect_config_dir().returning(|| None);
        runtime
            .expect_env_var()
            .returning(|_| Err(std::env::VarError::NotPresent));

        let err = route(
            runtime,
            None,
            &Signals::default(),
            &["download-bsd".to_string()],
        )
        .unwrap_err();
        assert!(err.to_string().contains("download-bsd"));
    }
}
