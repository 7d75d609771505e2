/// Identifies one file selection. Later selections get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UploadTicket(u64);

/// Orders concurrent file reads so that only the most recent selection may
/// replace the loaded sheet, whatever order the reads finish in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadGate {
    issued: u64,
}

impl UploadGate {
    pub fn begin(&mut self) -> UploadTicket {
        self.issued += 1;
        UploadTicket(self.issued)
    }

    pub fn is_current(&self, ticket: UploadTicket) -> bool {
        ticket.0 == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut gate = UploadGate::default();

        let first = gate.begin();
        let second = gate.begin();

        assert!(second > first);
        assert!(gate.is_current(second));
        assert!(
            !gate.is_current(first),
            "an older selection must not overwrite a newer one"
        );
    }

    #[test]
    fn single_upload_is_current_until_another_begins() {
        let mut gate = UploadGate::default();

        let ticket = gate.begin();
        assert!(gate.is_current(ticket));

        gate.begin();
        assert!(!gate.is_current(ticket));
    }
}
