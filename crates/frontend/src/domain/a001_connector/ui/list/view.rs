use crate::domain::a001_connector::api;
use crate::system::auth::use_auth;
use contracts::domain::a001_connector::SearchSourceConnector;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Connector list for the current search space.
#[component]
pub fn ConnectorsPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let (auth_state, _) = use_auth();

    let (items, set_items) = signal::<Vec<SearchSourceConnector>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_connectors(&token).await {
                Ok(connectors) => {
                    set_items.set(connectors);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("failed to load connectors: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    // Load on mount and again once the token is restored from storage.
    Effect::new(move |_| {
        if auth_state.get().access_token.is_some() {
            fetch();
        }
    });

    let go_to_add_obsidian = move |_| {
        let search_space_id = params.get_untracked().get("search_space_id").unwrap_or_default();
        navigate(
            &format!(
                "/dashboard/{}/connectors/add/obsidian-connector",
                search_space_id
            ),
            Default::default(),
        );
    };

    view! {
        <div style="padding: 20px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 style="font-size: 24px; font-weight: bold;">"Connectors"</h1>
                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=go_to_add_obsidian>
                        "Connect Obsidian Vault"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        "Refresh"
                    </Button>
                </Space>
            </Flex>

            <div style="margin-top: 16px;">
                {move || error.get().map(|e| view! {
                    <div style="padding: 12px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                        <span style="color: var(--color-error);">{e}</span>
                    </div>
                })}
            </div>

            <Show when=move || loading.get()>
                <div style="padding: 16px; display: flex; align-items: center; gap: 8px;">
                    <Spinner size=SpinnerSize::Small />
                    <span style="color: var(--color-text-tertiary);">"Loading connectors..."</span>
                </div>
            </Show>

            <Show when=move || !loading.get()>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=140.0>"Type"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Indexable"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=150.0>"Last Indexed"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=150.0>"Created"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || items.get().into_iter().map(|connector| {
                            let last_indexed = connector
                                .last_indexed_at
                                .map(format_timestamp)
                                .unwrap_or_else(|| "Never".to_string());
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {connector.name.clone()}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                            {connector.connector_type.label()}
                                        </Badge>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {if connector.is_indexable { "Yes" } else { "No" }}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {last_indexed}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {format_timestamp(connector.created_at)}
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}
