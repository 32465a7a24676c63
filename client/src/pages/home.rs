//! Home page: dotted hero, personal notes and the tracked learning items.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::content_editor::ContentEditor;
use crate::components::delete_button::DeleteButton;
use crate::components::dot_pattern::DotPattern;
use crate::components::loading_state::LoadingState;
use crate::state::editor::EditorContent;
use crate::state::learning::{ContentFilters, ContentStatus, LearningItem, filter_items, remove_item, sample_items};
use crate::state::theme::ThemeState;
use crate::util::dark_mode;

fn item_meta_line(item: &LearningItem) -> String {
    let mut parts = vec![item.kind.label().to_owned(), item.status.label().to_owned()];
    if let Some(author) = item.author.as_deref().filter(|a| !a.is_empty()) {
        parts.push(author.to_owned());
    }
    parts.push(format!("{}%", item.progress_percent()));
    parts.join(" · ")
}

fn items_summary(count: usize) -> String {
    match count {
        0 => "Nothing tracked yet.".to_owned(),
        1 => "1 item".to_owned(),
        n => format!("{n} items"),
    }
}

fn filtered_summary(shown: usize, total: usize) -> String {
    if shown == total { items_summary(total) } else { format!("{shown} of {total} shown") }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let items = RwSignal::new(sample_items());
    let filters = RwSignal::new(ContentFilters::default());
    let visible = Memo::new(move |_| filters.with(|f| items.with(|list| filter_items(list, f))));
    let notes = RwSignal::new(EditorContent::new());
    let notes_locked = RwSignal::new(false);

    // The editor only becomes interactive once the bundle has hydrated.
    let hydrated = RwSignal::new(false);
    Effect::new(move || hydrated.set(true));

    let on_notes_change = Callback::new(move |next: EditorContent| notes.set(next));

    view! {
        <main class="home">
            <section class="home__hero">
                <DotPattern class="home__hero-dots" width=20.0 height=20.0 cx=1.0 cy=1.0 cr=1.0/>
                <div class="home__hero-copy">
                    <h1>"Mindmarks"</h1>
                    <p>"Everything you are reading, watching and learning, in one place."</p>
                    <button
                        type="button"
                        class="home__theme-toggle"
                        on:click=move |_| theme.update(|t| *t = dark_mode::toggle(*t))
                    >
                        {move || theme.get().toggle_label()}
                    </button>
                </div>
            </section>

            <section class="home__notes">
                <header class="home__section-header">
                    <h2>"Notes"</h2>
                    <label class="home__lock">
                        <input
                            type="checkbox"
                            prop:checked=move || notes_locked.get()
                            on:change=move |ev| notes_locked.set(event_target_checked(&ev))
                        />
                        "Lock"
                    </label>
                </header>
                <Show
                    when=move || hydrated.get()
                    fallback=|| view! { <LoadingState message="Loading editor..." class="loading-state"/> }
                >
                    {move || {
                        view! {
                            <ContentEditor
                                content=notes
                                on_change=on_notes_change
                                placeholder="Capture a thought about what you are learning..."
                                read_only=notes_locked.get()
                            />
                        }
                    }}
                </Show>
            </section>

            <section class="home__items">
                <header class="home__section-header">
                    <h2>"Learning queue"</h2>
                    <span class="home__count">
                        {move || filtered_summary(visible.with(Vec::len), items.with(Vec::len))}
                    </span>
                </header>
                <div class="item-filters">
                    <input
                        type="search"
                        class="item-filters__query"
                        placeholder="Search title, summary or author"
                        prop:value=move || filters.with(|f| f.query.clone().unwrap_or_default())
                        on:input=move |ev| filters.update(|f| f.query = Some(event_target_value(&ev)))
                    />
                    <select
                        class="item-filters__status"
                        on:change=move |ev| {
                            let status = ContentStatus::parse(&event_target_value(&ev));
                            filters.update(|f| f.statuses = status.into_iter().collect());
                        }
                    >
                        <option value="">"All statuses"</option>
                        {ContentStatus::ALL
                            .into_iter()
                            .map(|status| view! { <option value=status.wire_name()>{status.label()}</option> })
                            .collect_view()}
                    </select>
                    <For each=move || filters.with(|f| f.tags.clone()) key=|tag| tag.clone() let:tag>
                        <TagChip tag=tag filters=filters/>
                    </For>
                </div>
                <ul class="item-list">
                    <For each=move || visible.get() key=|item| item.id.clone() let:item>
                        <ItemCard item=item items=items filters=filters/>
                    </For>
                </ul>
            </section>
        </main>
    }
}

/// Draggable card for one learning item.
#[component]
fn ItemCard(
    item: LearningItem,
    items: RwSignal<Vec<LearningItem>>,
    filters: RwSignal<ContentFilters>,
) -> impl IntoView {
    let id = item.id.clone();
    let meta_line = item_meta_line(&item);
    let on_delete = Callback::new(move |()| {
        items.update(|list| {
            remove_item(list, &id);
        });
    });

    view! {
        <li
            class="item-card"
            draggable="true"
            on:dragstart=move |_| {
                #[cfg(feature = "hydrate")]
                log::debug!("drag started on item card");
            }
        >
            <div class="item-card__body">
                <span class="item-card__title">{item.title.clone()}</span>
                <span class="item-card__meta">{meta_line}</span>
                <div class="item-card__tags">
                    {item.tags.iter().map(|tag| view! { <TagChip tag=tag.clone() filters=filters/> }).collect_view()}
                </div>
            </div>
            <DeleteButton
                on_delete=on_delete
                class="delete-button item-card__delete"
                aria_label=format!("Delete {}", item.title)
                {..}
                data-item-id=item.id.clone()
            />
        </li>
    }
}

/// Tag button toggling the tag in the active filters.
#[component]
fn TagChip(tag: String, filters: RwSignal<ContentFilters>) -> impl IntoView {
    let class = {
        let tag = tag.clone();
        move || {
            if filters.with(|f| f.tags.contains(&tag)) { "tag-chip tag-chip--active" } else { "tag-chip" }
        }
    };
    let label = format!("#{tag}");

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| filters.update(|f| f.toggle_tag(&tag))
        >
            {label}
        </button>
    }
}
