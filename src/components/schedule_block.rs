//! Schedule Blocking View
//!
//! Lists the schedule slots of a day; the checked slots are posted with the
//! form to block them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlFormElement;

use crate::api;
use crate::config::actions;
use crate::debounce::use_debounced;
use crate::feedback::{alert, notify_failure, submit_with_feedback};
use crate::models::ScheduleSlot;

fn iso_date(year: u32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Today's date in local time
fn today() -> String {
    let now = js_sys::Date::new_0();
    iso_date(now.get_full_year(), now.get_month() + 1, now.get_date())
}

/// `form.reset()` empties the date input. Writing the kept day back
/// re-applies it to the field and re-runs the slot reload for it.
fn restore_day(date: ReadSignal<String>, set_date: WriteSignal<String>) {
    set_date.set(date.get_untracked());
}

#[component]
pub fn ScheduleBlock() -> impl IntoView {
    let (date, set_date) = signal(today());
    let (slots, set_slots) = signal(Vec::<ScheduleSlot>::new());
    let (loading, set_loading) = signal(false);
    let (sending, set_sending) = signal(false);

    // No delay: only the ticket check matters, a slower response for an
    // earlier date must not replace the current one
    let load_slots = use_debounced(0, move |day: String, ticket| {
        if !api::is_iso_date(&day) {
            set_slots.set(Vec::new());
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let result = api::list_schedules(&day).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(list) => {
                    web_sys::console::log_1(&format!("[Schedule] {} slots on {}", list.len(), day).into());
                    set_slots.set(list);
                }
                Err(e) => notify_failure("Schedule", &e),
            }
            set_loading.set(false);
        });
    });

    Effect::new(move |_| load_slots.run(date.get()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = event_target::<HtmlFormElement>(&ev);
        submit_with_feedback("Schedule", form, set_sending, move |form| {
            form.reset();
            restore_day(date, set_date);
            alert("Horarios bloqueados correctamente.");
        });
    };

    view! {
        <form
            class="schedule-block-form"
            action=actions::BLOCK_SCHEDULE
            method="post"
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <label>
                "Fecha "
                <input
                    type="date"
                    name="fecha"
                    required=true
                    prop:value=move || date.get()
                    on:change=move |ev| set_date.set(event_target_value(&ev))
                />
            </label>

            <Show when=move || loading.get()>
                <div class="loading">"Cargando horarios..."</div>
            </Show>
            <Show when=move || !loading.get() && slots.with(|s| s.is_empty())>
                <p class="empty">"No hay programaciones para esta fecha."</p>
            </Show>

            <ul class="slot-list">
                <For
                    each=move || slots.get()
                    key=|slot| slot.id
                    children=move |slot| view! {
                        <li>
                            <label>
                                <input type="checkbox" name="programaciones" value=slot.id.to_string() />
                                {format!("{} {} - {}", slot.day_label, slot.starts_at, slot.ends_at)}
                                {slot.doctor.map(|d| view! { <span class="slot-doctor">{d}</span> })}
                            </label>
                        </li>
                    }
                />
            </ul>

            <textarea name="motivo" placeholder="Motivo del bloqueo" required=true></textarea>
            <button type="submit" disabled=move || sending.get()>"Bloquear horarios"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_pads() {
        assert_eq!(iso_date(2026, 3, 7), "2026-03-07");
        assert!(api::is_iso_date(&iso_date(2026, 12, 31)));
    }

    #[tokio::test]
    async fn test_restore_day_reloads_same_day() {
        use any_spawner::Executor;
        use std::cell::RefCell;
        use std::rc::Rc;

        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        tokio::task::LocalSet::new()
            .run_until(async {
                let (date, set_date) = signal(String::from("2026-10-14"));
                let loads = Rc::new(RefCell::new(Vec::<String>::new()));
                let seen = loads.clone();
                Effect::new(move |_| seen.borrow_mut().push(date.get()));
                Executor::tick().await;

                restore_day(date, set_date);
                Executor::tick().await;

                assert_eq!(loads.borrow().as_slice(), &["2026-10-14", "2026-10-14"]);
                assert_eq!(date.get_untracked(), "2026-10-14");
            })
            .await;
    }
}
