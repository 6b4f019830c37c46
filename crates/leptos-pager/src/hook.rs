//! Leptos binding: a paginator rebuilt from a reactive item list.

use leptos::prelude::*;

use crate::config::PagerConfig;
use crate::paginator::{PageSnapshot, Paginator, RenderPage};

/// Signals exposed to the view that owns the paginated list
pub struct PagerHandle<T: Send + Sync + 'static> {
    /// Items of the current page
    pub rows: ReadSignal<Vec<T>>,
    pub snapshot: ReadSignal<PageSnapshot>,
    /// Show page `n`
    pub go_to: Callback<usize>,
}

impl<T: Send + Sync + 'static> Clone for PagerHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PagerHandle<T> {}

/// Paginate `items`. A fresh `Paginator` positioned on page 1 replaces the
/// old one every time `items` changes.
pub fn use_paginator<T>(items: Signal<Vec<T>>, config: PagerConfig) -> PagerHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (rows, set_rows) = signal(Vec::<T>::new());
    let (snapshot, set_snapshot) = signal(PageSnapshot::default());
    let pager = StoredValue::new_local(None::<Paginator<T>>);

    Effect::new(move |_| {
        let items = items.get();
        let render: RenderPage<T> = Box::new(move |page: &[T]| set_rows.set(page.to_vec()));
        match Paginator::new(items, config, render) {
            Ok(mut fresh) => {
                set_snapshot.set(fresh.show_page(1));
                pager.set_value(Some(fresh));
            }
            Err(e) => {
                leptos::logging::warn!("[Pager] not initialized: {}", e);
                set_rows.set(Vec::new());
                set_snapshot.set(PageSnapshot::default());
                pager.set_value(None);
            }
        }
    });

    let go_to = Callback::new(move |n: usize| {
        pager.update_value(|current| {
            if let Some(current) = current.as_mut() {
                set_snapshot.set(current.show_page(n));
            }
        });
    });

    PagerHandle { rows, snapshot, go_to }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use tokio::task::LocalSet;

    use crate::state::RangeLabel;

    #[tokio::test]
    async fn test_go_to_and_rebuild_on_new_items() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let (items, set_items) = signal((0..45u32).collect::<Vec<_>>());
                let pager = use_paginator(items.into(), PagerConfig::new(10));
                Executor::tick().await;

                assert_eq!(pager.rows.get_untracked(), (0..10).collect::<Vec<_>>());
                assert_eq!(pager.snapshot.get_untracked().total_pages, 5);

                pager.go_to.run(3);
                assert_eq!(pager.snapshot.get_untracked().current_page, 3);
                assert_eq!(pager.rows.get_untracked(), (20..30).collect::<Vec<_>>());

                set_items.set((100..125).collect());
                Executor::tick().await;

                let snapshot = pager.snapshot.get_untracked();
                assert_eq!(snapshot.current_page, 1);
                assert_eq!(snapshot.total_pages, 3);
                assert_eq!(snapshot.range, RangeLabel { first: 1, last: 10, total: 25 });
                assert_eq!(pager.rows.get_untracked(), (100..110).collect::<Vec<_>>());
            })
            .await;
    }

    #[tokio::test]
    async fn test_invalid_config_leaves_pager_empty() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let (items, _) = signal(vec!["a", "b", "c"]);
                let pager = use_paginator(items.into(), PagerConfig::new(0));
                Executor::tick().await;

                pager.go_to.run(2);
                assert!(pager.rows.get_untracked().is_empty());
                assert_eq!(pager.snapshot.get_untracked(), PageSnapshot::default());
            })
            .await;
    }
}
