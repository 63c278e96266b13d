use super::aggregate::Appointment;
use crate::shared::pagination::{clamp_page, paginate, total_pages, PageWindow, DEFAULT_PAGE_SIZE};

/// Which partition the admin screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Active,
    History,
}

impl ViewMode {
    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Active => "Agendamentos Ativos",
            ViewMode::History => "Agendamentos Finalizados e Cancelados",
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            ViewMode::Active => "Ativos",
            ViewMode::History => "Histórico",
        }
    }
}

/// Appointments split by display category, most recent first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub active: Vec<Appointment>,
    pub history: Vec<Appointment>,
    /// Unknown status codes: shown in neither view
    pub unclassified: Vec<Appointment>,
}

impl Partition {
    pub fn for_mode(&self, mode: ViewMode) -> &[Appointment] {
        match mode {
            ViewMode::Active => &self.active,
            ViewMode::History => &self.history,
        }
    }
}

/// Most recent first; equal timestamps keep their input order
pub fn sort_by_schedule_desc(items: &mut [Appointment]) {
    items.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));
}

pub fn partition(items: &[Appointment]) -> Partition {
    let mut sorted = items.to_vec();
    sort_by_schedule_desc(&mut sorted);

    let mut result = Partition::default();
    for appointment in sorted {
        let status = appointment.status();
        if status.is_active() {
            result.active.push(appointment);
        } else if status.is_history() {
            result.history.push(appointment);
        } else {
            result.unclassified.push(appointment);
        }
    }
    result
}

/// View mode plus page position of the admin list. Each admin route builds
/// its own cursor, so entering a view starts on its first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    pub mode: ViewMode,
    pub page: usize,
    pub page_size: usize,
}

impl ListCursor {
    pub fn new(mode: ViewMode) -> Self {
        Self {
            mode,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn go_to(&mut self, page: usize, list_len: usize) {
        self.page = clamp_page(page, total_pages(list_len, self.page_size));
    }

    pub fn window(&self, partition: &Partition) -> PageWindow<Appointment> {
        paginate(partition.for_mode(self.mode), self.page_size, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_appointment::aggregate::AppointmentId;
    use crate::domain::a002_barber::BarberId;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use std::collections::HashSet;

    fn base_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn appt(id: i64, hours_before: i64, status_code: i32) -> Appointment {
        Appointment {
            id: AppointmentId(id),
            client_name: format!("Cliente {}", id),
            barber_id: Some(BarberId(1)),
            scheduled_at: base_time() - Duration::hours(hours_before),
            status_code,
            observation: None,
            services: Vec::new(),
        }
    }

    fn ids(items: &[Appointment]) -> Vec<i64> {
        items.iter().map(|a| a.id.0).collect()
    }

    #[test]
    fn test_sort_descending() {
        // T-1, T-3, T-2
        let items = vec![appt(1, 1, 1), appt(3, 3, 1), appt(2, 2, 1)];
        let result = partition(&items);
        assert_eq!(ids(&result.active), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let items = vec![appt(5, 2, 1), appt(4, 2, 2), appt(6, 2, 1)];
        let result = partition(&items);
        assert_eq!(ids(&result.active), vec![5, 4, 6]);
    }

    #[test]
    fn test_partition_by_category() {
        let items = vec![
            appt(1, 1, 1),
            appt(2, 2, 2),
            appt(3, 3, 5),
            appt(4, 4, 6),
            appt(5, 5, 7),
            appt(6, 6, 42),
        ];
        let result = partition(&items);

        assert_eq!(ids(&result.active), vec![1, 2]);
        assert_eq!(ids(&result.history), vec![3, 4, 5]);
        assert_eq!(ids(&result.unclassified), vec![6]);
    }

    #[test]
    fn test_partitions_are_disjoint_subsets() {
        let items: Vec<Appointment> = (0..30)
            .map(|i| appt(i, (i * 7) % 11, [1, 2, 3, 5, 6, 7, 0][i as usize % 7]))
            .collect();
        let result = partition(&items);

        let active: HashSet<i64> = ids(&result.active).into_iter().collect();
        let history: HashSet<i64> = ids(&result.history).into_iter().collect();
        let all: HashSet<i64> = ids(&items).into_iter().collect();

        assert!(active.is_disjoint(&history));
        assert!(active.is_subset(&all));
        assert!(history.is_subset(&all));
    }

    #[test]
    fn test_entering_a_view_starts_at_first_page() {
        let items: Vec<Appointment> = (0..12)
            .map(|i| appt(i, i, if i % 2 == 0 { 1 } else { 5 }))
            .collect();
        let result = partition(&items);

        let mut active = ListCursor::new(ViewMode::Active);
        active.go_to(2, result.active.len());
        assert_eq!(active.window(&result).page, 2);

        // Leaving for the history view and coming back mounts fresh cursors
        let history = ListCursor::new(ViewMode::History);
        assert_eq!(history.page, 1);
        assert_eq!(history.window(&result).page, 1);
        assert_eq!(ListCursor::new(ViewMode::Active).window(&result).page, 1);
    }

    #[test]
    fn test_stepping_through_pages_stays_in_bounds() {
        let items: Vec<Appointment> = (0..12).map(|i| appt(i, i, 1)).collect();
        let result = partition(&items);
        let len = result.active.len();
        let mut cursor = ListCursor::new(ViewMode::Active);

        let mut window = cursor.window(&result);
        assert!(!window.has_previous());
        let mut visited = vec![window.page];
        while window.has_next() {
            cursor.go_to(window.page + 1, len);
            window = cursor.window(&result);
            visited.push(window.page);
        }
        assert_eq!(visited, vec![1, 2, 3]);
        assert!(window.has_previous());

        cursor.go_to(window.page + 1, len);
        assert_eq!(cursor.page, 3);
        cursor.go_to(0, len);
        assert_eq!(cursor.page, 1);
    }

    #[test]
    fn test_page_shrinks_when_rows_leave_the_view() {
        let mut items: Vec<Appointment> = (0..6).map(|i| appt(i, i, 1)).collect();
        let mut cursor = ListCursor::new(ViewMode::Active);
        cursor.go_to(2, partition(&items).active.len());
        assert_eq!(cursor.page, 2);

        items[5].status_code = 5;
        let result = partition(&items);
        cursor.go_to(cursor.page, result.active.len());
        assert_eq!(cursor.page, 1);
        assert_eq!(cursor.window(&result).items.len(), 5);
    }

    #[test]
    fn test_window_of_selected_mode() {
        let items: Vec<Appointment> = (0..12).map(|i| appt(i, i, 1)).collect();
        let result = partition(&items);

        let mut cursor = ListCursor::new(ViewMode::Active);
        cursor.go_to(3, result.active.len());
        let window = cursor.window(&result);
        assert_eq!(window.items.len(), 2);
        assert_eq!(window.total_pages, 3);

        let window = ListCursor::new(ViewMode::History).window(&result);
        assert!(window.items.is_empty());
        assert_eq!(window.display_total_pages(), 1);
    }
}
