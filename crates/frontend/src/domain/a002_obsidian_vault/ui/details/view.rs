use super::view_model::AddObsidianConnectorVm;
use crate::shared::byte_format::format_bytes;
use crate::system::auth::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Setup form for registering an Obsidian vault connector.
#[component]
pub fn AddObsidianConnectorPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let (auth_state, _) = use_auth();
    let access_token = Signal::derive(move || auth_state.get().access_token);

    let vm = AddObsidianConnectorVm::new(access_token);

    let form = vm.form;
    let preview = vm.preview;
    let preview_stale = vm.preview_stale;
    let preview_error = vm.preview_error;
    let submit_error = vm.submit_error;
    let notice = vm.notice;
    let is_previewing = vm.is_previewing;
    let is_submitting = vm.is_submitting;

    let path_count = Memo::new(move |_| form.with(|f| f.vault_paths.len()));

    let connectors_route = move || {
        let search_space_id = params.get_untracked().get("search_space_id").unwrap_or_default();
        format!("/dashboard/{}/connectors", search_space_id)
    };

    let navigate_back = navigate.clone();
    let go_back = move |_| navigate_back(&connectors_route(), Default::default());

    let on_created = Callback::new(move |_| {
        navigate(&connectors_route(), Default::default());
    });

    let vm_rows = vm.clone();
    let vm_add = vm.clone();
    let vm_preview = vm.clone();
    let vm_create = vm.clone();

    view! {
        <div style="padding: 20px; max-width: 960px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 style="font-size: 24px; font-weight: bold;">"Connect Obsidian Vault"</h1>
                <Button appearance=ButtonAppearance::Secondary on_click=go_back>
                    "Back to Connectors"
                </Button>
            </Flex>

            <div style="margin-top: 16px;">
                {move || notice.get().map(|n| view! {
                    <div class="info-box text-success">{n}</div>
                })}
                {move || submit_error.get().map(|e| view! {
                    <div class="warning-box text-error">{e}</div>
                })}
            </div>

            <div class="detail-form" style="margin-top: 16px;">
                <div class="form__group">
                    <label class="form__label" for="connector-name">{"Connector Name"}</label>
                    <input
                        class="form__input"
                        type="text"
                        id="connector-name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            form.update(|f| f.name = event_target_value(&ev));
                        }
                        placeholder="Enter connector name"
                    />
                    {move || (!form.with(|f| f.is_name_valid())).then(|| view! {
                        <small class="help-text text-error">
                            {"Name must be at least 3 characters"}
                        </small>
                    })}
                </div>

                <div class="form__group">
                    <label class="form__label">{"Vault Paths"}</label>
                    <small class="help-text">
                        {"Absolute paths to the vault directories on the machine the backend runs on"}
                    </small>
                    {move || (0..path_count.get()).map(|i| {
                        let vm_update = vm_rows.clone();
                        let vm_remove = vm_rows.clone();
                        view! {
                            <div style="display: flex; gap: 8px; align-items: center; margin-top: 8px;">
                                <input
                                    class="form__input"
                                    type="text"
                                    style="flex: 1;"
                                    prop:value=move || form.with(|f| {
                                        f.vault_paths.get(i).cloned().unwrap_or_default()
                                    })
                                    on:input=move |ev| {
                                        vm_update.update_path(i, event_target_value(&ev));
                                    }
                                    placeholder="/path/to/your/obsidian/vault"
                                />
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    disabled=Signal::derive(move || path_count.get() == 1)
                                    on_click=move |_| vm_remove.remove_path(i)
                                >
                                    "Remove"
                                </Button>
                            </div>
                        }
                    }).collect_view()}
                    <div style="margin-top: 8px;">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm_add.add_path()
                        >
                            "Add Another Path"
                        </Button>
                    </div>
                </div>

                <Space>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm_preview.preview_command()
                        disabled=Signal::derive(move || is_previewing.get())
                    >
                        {move || if is_previewing.get() { "Loading Preview..." } else { "Preview Vault Files" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm_create.create_command(on_created)
                        disabled=Signal::derive(move || {
                            is_submitting.get() || !form.with(|f| f.is_name_valid())
                        })
                    >
                        {move || if is_submitting.get() { "Creating Connector..." } else { "Create Connector" }}
                    </Button>
                </Space>

                {move || preview_error.get().map(|e| view! {
                    <div class="warning-box text-error" style="margin-top: 12px;">{e}</div>
                })}
            </div>

            {move || preview.get().map(|p| {
                let total_files = p.total_files;
                let truncated = p.truncated;
                let shown = p.files.len();
                let files_heading = if truncated {
                    format!("Vault Files (showing first {} of {})", shown, total_files)
                } else {
                    format!("Vault Files ({})", total_files)
                };

                view! {
                    <div class="details-section" style="margin-top: 24px;">
                        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                            <h3 style="font-size: 18px; font-weight: 600;">
                                {format!(
                                    "Found {} {}",
                                    p.vault_stats.total_vaults,
                                    if p.vault_stats.total_vaults == 1 { "vault" } else { "vaults" },
                                )}
                            </h3>
                            <Show when=move || preview_stale.get()>
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                                    "Paths changed since this preview"
                                </Badge>
                            </Show>
                        </Flex>

                        {p.vault_stats.vaults.iter().map(|vault| view! {
                            <div style="display: flex; gap: 16px; align-items: baseline; padding: 8px 0; border-bottom: 1px solid var(--color-border);">
                                <strong>{vault.name.clone()}</strong>
                                <span style="color: var(--color-text-tertiary); font-size: 12px;">
                                    {vault.path.clone()}
                                </span>
                                <span>{format!("{} files", vault.total_files)}</span>
                                <span>{format_bytes(vault.total_size)}</span>
                                {vault.last_modified.map(|dt| view! {
                                    <span style="color: var(--color-text-tertiary);">
                                        {format!("Updated {}", format_timestamp(dt))}
                                    </span>
                                })}
                            </div>
                        }).collect_view()}

                        <h4 style="margin-top: 16px; font-size: 15px; font-weight: 600;">
                            {files_heading}
                        </h4>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=true min_width=180.0>"File"</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=240.0>"Path"</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=120.0>"Vault"</TableHeaderCell>
                                    <TableHeaderCell resizable=false>"Size"</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=140.0>"Modified"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {p.files.clone().into_iter().map(|file| view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {file.filename.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {file.relative_path.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {file.vault_name.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format_bytes(file.size)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format_timestamp(file.modified_time)}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </div>
                }
            })}
        </div>
    }
}
