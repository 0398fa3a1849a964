//! Site content loader for .portal/site.toml
//!
//! The site file carries the sidebar navigation entries, the content selector
//! sections and the footer links. When it is missing the built-in Dgraph
//! GraphQL layout is used.

use super::types::{FooterLink, SiteConfig};
use super::PORTAL_DIR;
use portal_core::prelude::*;
use portal_core::{ContentCategory, NavigationEntry};
use std::path::Path;

const SITE_FILENAME: &str = "site.toml";

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Dgraph GraphQL".to_string(),
            sidebar: default_sidebar(),
            sections: default_sections(),
            footer: default_footer(),
        }
    }
}

fn default_sections() -> Vec<ContentCategory> {
    vec![
        ContentCategory::new(
            "Slash GraphQL",
            "Dgraph GraphQL in a managed cloud service.",
        )
        .beta(),
        ContentCategory::new("GraphQL Intro", "Learn about GraphQL and Dgraph."),
        ContentCategory::new(
            "Documentation Reference",
            "All the nitty-gritty details about GraphQL with Dgraph.",
        ),
        ContentCategory::new(
            "Tutorials",
            "Step by step tutorials on how to build an app in any framework.",
        ),
        ContentCategory::new(
            "Example Apps",
            "We build lots of GraphQL apps, here are some examples we've built over time.",
        )
        .hide_side_bar(),
        ContentCategory::new(
            "Tools and Deployments",
            "Other tools you might want to use with Dgraph and how to deploy apps.",
        ),
    ]
}

fn default_sidebar() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::new("Slash GraphQL", "slash-graphql/index.mdx").with_children(vec![
            NavigationEntry::new("Quick Start", "slash-graphql/quick-start.mdx"),
            NavigationEntry::new("Administering", "slash-graphql/admin.mdx"),
        ]),
        NavigationEntry::new("GraphQL Intro", "intro/index.mdx").with_children(vec![
            NavigationEntry::new("Why GraphQL", "intro/why-graphql.mdx"),
            NavigationEntry::new("Quick Start", "intro/quick-start.mdx"),
        ]),
        NavigationEntry::new("Documentation Reference", "reference/index.mdx").with_children(
            vec![
                NavigationEntry::new("Schema", "reference/schema/index.mdx").with_children(vec![
                    NavigationEntry::new("Types", "reference/schema/types.mdx"),
                    NavigationEntry::new("Directives", "reference/schema/directives.mdx"),
                ]),
                NavigationEntry::new("Queries", "reference/queries.mdx"),
                NavigationEntry::new("Mutations", "reference/mutations.mdx"),
            ],
        ),
        NavigationEntry::new("Tutorials", "tutorials/index.mdx"),
        NavigationEntry::new("Example Apps", "examples/index.mdx"),
        NavigationEntry::new("Tools and Deployments", "tools/index.mdx").with_children(vec![
            NavigationEntry::new("Deploying", "tools/deploy.mdx"),
        ]),
    ]
}

fn default_footer() -> Vec<FooterLink> {
    vec![
        FooterLink::new("Twitter", "https://twitter.com/dgraphlabs"),
        FooterLink::new("GitHub", "https://github.com/dgraph-io/graphql-dgraph-web"),
    ]
}

/// Load site content from .portal/site.toml
///
/// Returns the built-in site if the file doesn't exist or can't be parsed.
/// Sections that a file leaves out are taken from the defaults only when the
/// file also leaves out the sidebar, so a custom sidebar never pairs with
/// built-in sections.
pub fn load_site(project_path: &Path) -> SiteConfig {
    let site_path = project_path.join(PORTAL_DIR).join(SITE_FILENAME);

    if !site_path.exists() {
        debug!("No site file at {:?}, using built-in site", site_path);
        return SiteConfig::default();
    }

    let content = match std::fs::read_to_string(&site_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {:?}: {}", site_path, e);
            return SiteConfig::default();
        }
    };

    match toml::from_str::<SiteConfig>(&content) {
        Ok(mut site) => {
            if site.sidebar.is_empty() && site.sections.is_empty() {
                site.sidebar = default_sidebar();
                site.sections = default_sections();
            }
            debug!(
                "Loaded site from {:?} ({} sidebar entries, {} sections)",
                site_path,
                site.sidebar.len(),
                site.sections.len()
            );
            site
        }
        Err(e) => {
            warn!("Failed to parse {:?}: {}", site_path, e);
            SiteConfig::default()
        }
    }
}
