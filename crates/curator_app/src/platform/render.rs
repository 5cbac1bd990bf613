use std::fmt;

use chrono::DateTime;
use curator_core::{AppViewModel, ChoiceView, DetailView, Resource, ResourceListView};

pub fn render(view: &AppViewModel) -> String {
    Screen(view).to_string()
}

/// Text form of one frame of the browse page.
struct Screen<'a>(&'a AppViewModel);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "== {} ==", view.heading)?;
        if let Some(url) = &view.current_url {
            writeln!(f, "url: {url}")?;
        }
        if let Some(menu) = &view.profile_menu {
            writeln!(f, "[{}] {} | {}", menu.initials, menu.avatar_url, menu.sign_out_label)?;
        }
        if !view.search_text.is_empty() {
            writeln!(f, "search: {}", view.search_text)?;
        }

        let mut categories = choices(&view.categories);
        if view.show_category_clear {
            categories.push_str("  (clear)");
        }
        writeln!(f, "categories: {categories}")?;

        let tabs: Vec<String> = view
            .type_tabs
            .iter()
            .map(|tab| {
                if tab.selected {
                    format!("[{}]", tab.label)
                } else {
                    tab.label.to_string()
                }
            })
            .collect();
        writeln!(f, "type: {}", tabs.join(" | "))?;

        let mut tags = choices(&view.tags);
        if view.show_clear_all_tags {
            tags.push_str("  (clear all)");
        }
        writeln!(f, "tags: {tags}")?;

        match &view.resources {
            ResourceListView::Loading => writeln!(f, "loading resources...")?,
            ResourceListView::Unavailable => writeln!(f, "resources are unavailable right now")?,
            ResourceListView::Loaded(cards) if cards.is_empty() => {
                writeln!(f, "no resources match these filters")?
            }
            ResourceListView::Loaded(cards) => {
                for card in cards {
                    writeln!(
                        f,
                        "- {} [{}] {} | {} | ^{} *{}{} | {}",
                        card.id,
                        card.kind.as_str(),
                        card.title,
                        card.category,
                        card.upvotes,
                        card.bookmarks,
                        if card.bookmarked { " (saved)" } else { "" },
                        card.author.as_deref().unwrap_or("anonymous")
                    )?;
                }
            }
        }

        match &view.detail {
            DetailView::Closed => Ok(()),
            DetailView::Loading { id } => writeln!(f, "-- loading resource {id}..."),
            DetailView::Unavailable { id } => writeln!(f, "-- resource {id} is unavailable"),
            DetailView::Loaded(resource) => write_detail(f, resource),
        }
    }
}

fn write_detail(f: &mut fmt::Formatter<'_>, resource: &Resource) -> fmt::Result {
    writeln!(f, "-- {} ({})", resource.title, resource.resource_type.as_str())?;
    writeln!(f, "   {}", resource.url)?;
    if let Some(description) = &resource.description {
        writeln!(f, "   {description}")?;
    }
    writeln!(
        f,
        "   {} | tags: {} | added {}",
        resource.categories.name,
        resource.tags.join(", "),
        display_date(&resource.created_at)
    )
}

fn choices(items: &[ChoiceView]) -> String {
    items
        .iter()
        .map(|item| {
            if item.selected {
                format!("[{}]", item.name)
            } else {
                item.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Date part of an RFC 3339 timestamp; anything else is shown as is.
fn display_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use curator_core::{update, AppState, Category, Msg, Tag};

    use super::*;

    #[test]
    fn renders_selected_filters_and_loading_list() {
        let now = std::time::Instant::now();
        let (state, _) = update(
            AppState::new(),
            Msg::Mounted {
                query: "?category=DSA&tag=arrays&resourceType=video".into(),
                at: now,
            },
        );
        let (state, _) = update(
            state,
            Msg::CategoriesLoaded(Ok(vec![
                Category {
                    id: 1,
                    name: "DSA".into(),
                },
                Category {
                    id: 2,
                    name: "Web".into(),
                },
            ])),
        );
        let (state, _) = update(
            state,
            Msg::TagsLoaded(Ok(vec![Tag {
                id: 1,
                name: "arrays".into(),
            }])),
        );

        let text = render(&state.view());
        assert!(text.starts_with("== DSA Resources =="));
        assert!(text.contains("url: /resources?category=DSA&resourceType=video&tag=arrays"));
        assert!(text.contains("categories: [DSA] Web  (clear)"));
        assert!(text.contains("type: All | [Video] | Article"));
        assert!(text.contains("tags: [arrays]  (clear all)"));
        assert!(text.contains("loading resources..."));
    }

    #[test]
    fn timestamps_are_shown_as_dates() {
        assert_eq!(display_date("2025-03-01T08:00:00Z"), "2025-03-01");
        assert_eq!(display_date("yesterday"), "yesterday");
    }
}
