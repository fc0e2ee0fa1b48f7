use crate::datetime::parse_datetime_local;
use crate::dto::scheduling::{RoundSlot, SubEventSchedule};
use crate::error::{Result, SharedError};
use chrono::Duration;
use chrono_tz::Tz;

/// Length given to a round whenever its start is moved.
pub const ROUND_DURATION_HOURS: i64 = 2;

/// Inline edit of one sub-event schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEditor {
    schedule: SubEventSchedule,
}

impl ScheduleEditor {
    pub fn new(schedule: &SubEventSchedule) -> Self {
        ScheduleEditor {
            schedule: schedule.clone(),
        }
    }

    pub fn schedule_id(&self) -> &str {
        &self.schedule.id
    }

    pub fn schedule(&self) -> &SubEventSchedule {
        &self.schedule
    }

    fn round_mut(&mut self, index: usize) -> Result<&mut RoundSlot> {
        self.schedule
            .rounds
            .get_mut(index)
            .ok_or(SharedError::OutOfRange(index))
    }

    pub fn rename_round(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.round_mut(index)?.name = name.into();
        Ok(())
    }

    /// Moves a round to a new start; its end follows two hours later.
    pub fn set_round_start(&mut self, index: usize, value: &str, tz: Tz) -> Result<()> {
        let start = parse_datetime_local(value, tz)?;
        let slot = &mut self.round_mut(index)?.time_slot;
        slot.start = start;
        slot.end = start + Duration::hours(ROUND_DURATION_HOURS);
        Ok(())
    }

    pub fn finish(self) -> SubEventSchedule {
        self.schedule
    }
}

/// The list of schedules shown on a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleBoard {
    pub schedules: Vec<SubEventSchedule>,
}

impl ScheduleBoard {
    pub fn new(schedules: Vec<SubEventSchedule>) -> Self {
        ScheduleBoard { schedules }
    }

    /// Swaps in a saved schedule with the same id; unknown ids are ignored.
    pub fn replace(&mut self, schedule: SubEventSchedule) {
        if let Some(existing) = self.schedules.iter_mut().find(|s| s.id == schedule.id) {
            *existing = schedule;
        }
    }
}

/// Scheduled rounds of one sub-event, empty when it has no schedule yet.
pub fn rounds_for_sub_event<'a>(
    schedules: &'a [SubEventSchedule],
    sub_event_id: &str,
) -> &'a [RoundSlot] {
    schedules
        .iter()
        .find(|s| s.sub_event_id == sub_event_id)
        .map(|s| s.rounds.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::resolve_timezone;
    use crate::dto::scheduling::ScheduleListResponse;
    use pretty_assertions::assert_eq;

    fn schedules() -> Vec<SubEventSchedule> {
        let body: ScheduleListResponse = serde_json::from_str(
            r#"{"schedules":[
                {"_id":"sc1","subEventId":"s1","subEventName":"Hackathon","priority":1,
                 "rounds":[{"roundId":"r1","name":"Round 1",
                   "timeSlot":{"start":"2025-04-15T09:00:00Z","end":"2025-04-15T11:00:00Z"}}]},
                {"_id":"sc2","subEventId":"s2","subEventName":"Quiz","rounds":[]}
            ]}"#,
        )
        .unwrap();
        body.schedules
    }

    #[test]
    fn moving_a_round_sets_a_two_hour_slot() {
        let mut editor = ScheduleEditor::new(&schedules()[0]);
        editor
            .set_round_start(0, "2025-04-15T13:30", resolve_timezone("Asia/Kolkata"))
            .unwrap();
        let slot = &editor.schedule().rounds[0].time_slot;
        assert_eq!(slot.start.to_rfc3339(), "2025-04-15T08:00:00+00:00");
        assert_eq!(slot.end.to_rfc3339(), "2025-04-15T10:00:00+00:00");
    }

    #[test]
    fn edits_do_not_touch_the_original() {
        let original = schedules();
        let mut editor = ScheduleEditor::new(&original[0]);
        editor.rename_round(0, "Finals").unwrap();
        assert_eq!(original[0].rounds[0].name, "Round 1");
        assert_eq!(editor.finish().rounds[0].name, "Finals");
    }

    #[test]
    fn bad_round_index_is_an_error() {
        let mut editor = ScheduleEditor::new(&schedules()[1]);
        assert_eq!(
            editor.rename_round(3, "x"),
            Err(SharedError::OutOfRange(3))
        );
    }

    #[test]
    fn board_replaces_by_id() {
        let mut board = ScheduleBoard::new(schedules());
        let mut editor = ScheduleEditor::new(&board.schedules[0]);
        editor.rename_round(0, "Opening").unwrap();
        board.replace(editor.finish());
        assert_eq!(board.schedules[0].rounds[0].name, "Opening");
        assert_eq!(board.schedules[1].sub_event_name, "Quiz");
    }

    #[test]
    fn rounds_lookup_by_sub_event() {
        let all = schedules();
        assert_eq!(rounds_for_sub_event(&all, "s1").len(), 1);
        assert!(rounds_for_sub_event(&all, "s2").is_empty());
        assert!(rounds_for_sub_event(&all, "missing").is_empty());
    }
}
