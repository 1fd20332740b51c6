//! Sidebar component with collapsible menu groups built from the nav tree.

use crate::layout::global_context::AppGlobalContext;
use contracts::shared::navigation::nav_tree::join_path;
use contracts::shared::navigation::NavNode;
use leptos::prelude::*;

/// Side navigation data shipped with the frontend.
pub const MENU_JSON: &str = include_str!("menu.json");

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(Vec::<String>::new());
    let nodes = ctx.nav_tree();

    view! {
        <div class="app-sidebar__content">
            {render_nodes(nodes, "/".to_string(), 0, ctx, expanded_groups)}
        </div>
    }
}

fn render_nodes(
    nodes: Vec<NavNode>,
    parent: String,
    depth: usize,
    ctx: AppGlobalContext,
    expanded_groups: RwSignal<Vec<String>>,
) -> AnyView {
    nodes
        .into_iter()
        .map(|node| {
            let full_path = join_path(&parent, &node.path);
            let padding = format!("{}px", 12 + depth * 10);
            let icon = node.icon.clone().map(|name| {
                view! { <span class=format!("app-sidebar__icon icon-{}", name)></span> }
            });

            if node.is_leaf() {
                let path_for_active = full_path.clone();
                let path_for_click = full_path.clone();
                return view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || {
                            ctx.active_key().as_deref() == Some(path_for_active.as_str())
                        }
                        style:padding-left=padding
                        on:click=move |_| ctx.open_path(&path_for_click, "")
                    >
                        <div class="app-sidebar__item-content">
                            {icon}
                            <span>{node.title}</span>
                        </div>
                    </div>
                }
                .into_any();
            }

            let group_for_click = full_path.clone();
            let group_for_chevron = full_path.clone();
            let group_for_show = full_path.clone();
            let child_nodes = StoredValue::new(node.children);

            view! {
                <div>
                    <div
                        class="app-sidebar__item"
                        style:padding-left=padding
                        on:click=move |_| {
                            let gid = group_for_click.clone();
                            expanded_groups.update(move |items| {
                                if let Some(pos) = items.iter().position(|x| x == &gid) {
                                    items.remove(pos);
                                } else {
                                    items.push(gid);
                                }
                            });
                        }
                    >
                        <div class="app-sidebar__item-content">
                            {icon}
                            <span>{node.title}</span>
                        </div>
                        <div
                            class="app-sidebar__chevron"
                            class:app-sidebar__chevron--expanded=move || {
                                expanded_groups.get().contains(&group_for_chevron)
                            }
                        >
                            "›"
                        </div>
                    </div>
                    <Show when=move || expanded_groups.get().contains(&group_for_show)>
                        <div class="app-sidebar__children">
                            {render_nodes(
                                child_nodes.get_value(),
                                full_path.clone(),
                                depth + 1,
                                ctx,
                                expanded_groups,
                            )}
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        })
        .collect_view()
        .into_any()
}
