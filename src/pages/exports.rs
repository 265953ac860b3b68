//! CSV export for every user, plus admin maintenance jobs.
//!
//! DESIGN
//! ======
//! Exports run as server-side background tasks. The page polls
//! `/task-status/{id}` on a fixed interval until the task finishes, then
//! downloads the CSV by its key and hands it to the browser as a file.
//! `export_step` is the pure decision for each poll result.
//!
//! TRADE-OFFS
//! ==========
//! Polling stops after `MAX_POLLS` attempts so a lost worker does not keep
//! the page spinning forever.

#[cfg(test)]
#[path = "exports_test.rs"]
mod exports_test;

use leptos::prelude::*;
use leptos_meta::Title;

#[cfg(any(test, feature = "csr"))]
use crate::net::types::{TaskState, TaskStatus};
use crate::state::context::SessionContext;
use crate::state::session::Role;

#[cfg(feature = "csr")]
const MAX_POLLS: u32 = 90;

/// What to do after one task-status poll.
#[cfg(any(test, feature = "csr"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ExportStep {
    Wait { progress: u32 },
    Download(String),
    Failed(String),
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn export_step(status: &TaskStatus) -> ExportStep {
    match &status.status {
        TaskState::Success => match status.download_key() {
            Some(key) => ExportStep::Download(key.to_owned()),
            None => ExportStep::Failed("Export finished without a file.".to_owned()),
        },
        TaskState::Failure => {
            ExportStep::Failed(status.error.clone().unwrap_or_else(|| "Export failed.".to_owned()))
        }
        TaskState::Pending | TaskState::Progress | TaskState::Other(_) => {
            ExportStep::Wait { progress: status.progress.min(100) }
        }
    }
}

#[component]
pub fn ExportsReportsPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let is_admin = move || ctx.session().role() == Some(Role::Admin);

    let info = RwSignal::new(String::new());
    let progress = RwSignal::new(None::<u32>);
    let exporting = RwSignal::new(false);

    let start_export = move |_| {
        if exporting.get() {
            return;
        }
        exporting.set(true);
        progress.set(Some(0));
        info.set("Export started...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let api = ctx.api();
            let interval = std::time::Duration::from_millis(ctx.config().task_poll_interval_ms);
            let outcome = match api.export_csv().await {
                Ok(task) => {
                    leptos::logging::log!("export: task {} queued", task.task_id);
                    poll_export(&api, &task.task_id, interval, progress).await
                }
                Err(e) => Err(e.user_message()),
            };
            match outcome {
                Ok(()) => info.set("Export downloaded.".to_owned()),
                Err(msg) => {
                    leptos::logging::warn!("export: {msg}");
                    info.set(msg);
                }
            }
            progress.set(None);
            exporting.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            exporting.set(false);
            progress.set(None);
        }
    };

    view! {
        <Title text="Exports & Reports · ParkEase"/>
        <section class="exports">
            <h1>"Exports & reports"</h1>
            <div class="exports__card">
                <h2>"Parking history"</h2>
                <p>"Download your reservation history as a CSV file."</p>
                <button on:click=start_export disabled=move || exporting.get()>"Export CSV"</button>
                {move || {
                    progress
                        .get()
                        .map(|p| {
                            view! {
                                <progress class="exports__progress" max="100" value=p.to_string()></progress>
                            }
                        })
                }}
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="exports__message">{move || info.get()}</p>
            </Show>
            <Show when=is_admin>
                <AdminJobs/>
            </Show>
        </section>
    }
}

#[cfg(feature = "csr")]
async fn poll_export(
    api: &crate::net::api::ApiClient,
    task_id: &str,
    interval: std::time::Duration,
    progress: RwSignal<Option<u32>>,
) -> Result<(), String> {
    use crate::util::download::{EXPORT_FILENAME, save_csv};

    for _ in 0..MAX_POLLS {
        gloo_timers::future::sleep(interval).await;
        let status = api.task_status(task_id).await.map_err(|e| e.user_message())?;
        match export_step(&status) {
            ExportStep::Wait { progress: p } => progress.set(Some(p)),
            ExportStep::Download(key) => {
                progress.set(Some(100));
                let csv = api.download_csv(&key).await.map_err(|e| e.user_message())?;
                return save_csv(EXPORT_FILENAME, &csv);
            }
            ExportStep::Failed(msg) => return Err(msg),
        }
    }
    Err("Export is taking too long. Try again later.".to_owned())
}

/// Admin-only job triggers and cache controls.
#[component]
fn AdminJobs() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let info = RwSignal::new(String::new());

    let run = move |job: AdminJob| {
        info.set(format!("{}...", job.label()));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let api = ctx.api();
            let message = match job {
                AdminJob::Reminders => api.trigger_reminders().await.map(|t| started_message(&t)),
                AdminJob::Reports => api.generate_reports().await.map(|t| started_message(&t)),
                AdminJob::ClearCache => api.clear_cache().await.map(|m| m.message),
                AdminJob::CacheStatus => {
                    api.cache_status().await.map(|c| format!("Cached parking lots: {}", c.parking_lots))
                }
            };
            info.set(message.unwrap_or_else(|e| e.user_message()));
        });
        #[cfg(not(feature = "csr"))]
        let _ = ctx;
    };

    view! {
        <div class="exports__card">
            <h2>"Admin jobs"</h2>
            <div class="exports__actions">
                {AdminJob::ALL
                    .into_iter()
                    .map(|job| view! { <button on:click=move |_| run(job)>{job.label()}</button> })
                    .collect_view()}
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="exports__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AdminJob {
    Reminders,
    Reports,
    ClearCache,
    CacheStatus,
}

impl AdminJob {
    const ALL: [Self; 4] = [Self::Reminders, Self::Reports, Self::ClearCache, Self::CacheStatus];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Reminders => "Send daily reminders",
            Self::Reports => "Generate monthly reports",
            Self::ClearCache => "Clear cache",
            Self::CacheStatus => "Cache status",
        }
    }
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn started_message(task: &crate::net::types::TaskStarted) -> String {
    task.message.clone().unwrap_or_else(|| format!("Task {} started.", task.task_id))
}
