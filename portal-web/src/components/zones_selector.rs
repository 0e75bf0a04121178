use leptos::*;
use portal::Zone;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct ZoneRow {
    id: Uuid,
    zone: Zone,
}

impl ZoneRow {
    fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            zone: Zone::default(),
        }
    }
}

/// Editable list of zones. A fresh row is appended as soon as the last one
/// gets a name, rows without a name are left for the form to drop.
#[component]
pub fn ZonesSelector(
    #[prop(into)] on_change: Callback<Vec<Zone>>,
) -> impl IntoView {
    let rows = create_rw_signal(vec![ZoneRow::empty()]);

    let edit = move |id: Uuid, change: Box<dyn FnOnce(&mut Zone)>| {
        rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
                change(&mut row.zone);
            }
            if rows.last().map_or(false, |row| !row.zone.name.is_empty()) {
                rows.push(ZoneRow::empty());
            }
        });
        let zones = rows.with_untracked(|rows| {
            rows.iter().map(|row| row.zone.clone()).collect::<Vec<_>>()
        });
        on_change.call(zones);
    };

    view! {
        <div class="w-full flex-col items-start text-left mb-2 p-2 bg-white text-gray-800">
            <div class="text-base font-semibold text-gray-900">"Zones"</div>
            <For
                each=move || rows.get()
                key=|row| row.id
                children=move |row| {
                    let id = row.id;
                    view! {
                        <div class="flex w-full gap-2 mb-1">
                            <input
                                type="text"
                                placeholder="Name"
                                class="bg-gray-50 border border-gray-300 rounded-lg p-2.5 w-2/3"
                                value=row.zone.name.clone()
                                on:input=move |ev| {
                                    let name = event_target_value(&ev);
                                    edit(id, Box::new(move |zone| zone.name = name));
                                }
                            />
                            <input
                                type="number"
                                min="0"
                                placeholder="Servers"
                                class="bg-gray-50 border border-gray-300 rounded-lg p-2.5 w-1/3"
                                value=row.zone.servers.to_string()
                                on:input=move |ev| {
                                    let servers = event_target_value(&ev)
                                        .trim()
                                        .parse::<u32>()
                                        .unwrap_or(0);
                                    edit(id, Box::new(move |zone| zone.servers = servers));
                                }
                            />
                        </div>
                    }
                }
            />
        </div>
    }
}
