//! Mock register bus for testing

use super::RegisterBus;
use crate::errors::{BusError, BusResult};
use std::sync::{Arc, Mutex, MutexGuard};

/// Register transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusTransaction {
    ReadByte { register: u8 },
    WriteByte { register: u8, value: u8 },
    ReadBurst { register: u8, count: usize },
}

#[derive(Debug, Default)]
struct JournalState {
    transactions: Vec<BusTransaction>,
    closes: usize,
}

/// Shared view of everything a [`MockBus`] did.
///
/// Stays readable after the bus itself has been moved into a driver or
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct MockJournal {
    state: Arc<Mutex<JournalState>>,
}

impl MockJournal {
    fn lock(&self) -> MutexGuard<'_, JournalState> {
        // poisoned by a panicking test; the log itself is still intact
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<BusTransaction> {
        self.lock().transactions.clone()
    }

    /// Only the register writes, in issue order
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.lock()
            .transactions
            .iter()
            .filter_map(|t| match *t {
                BusTransaction::WriteByte { register, value } => Some((register, value)),
                _ => None,
            })
            .collect()
    }

    /// How many times the bus handle has been closed
    pub fn closes(&self) -> usize {
        self.lock().closes
    }

}

/// Mock register bus backed by a 256-byte register file.
///
/// Records all transactions for test verification. Reads come from the
/// register file, writes land in it. Failures, short bursts and over-long
/// bursts can be injected.
#[derive(Debug)]
pub struct MockBus {
    registers: [u8; 256],
    journal: MockJournal,
    fail_read_on: Option<u8>,
    fail_write_on: Option<u8>,
    burst_limit: Option<usize>,
    burst_padding: usize,
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            registers: [0; 256],
            journal: MockJournal::default(),
            fail_read_on: None,
            fail_write_on: None,
            burst_limit: None,
            burst_padding: 0,
        }
    }

    /// Preload one register
    pub fn with_register(mut self, register: u8, value: u8) -> Self {
        self.registers[register as usize] = value;
        self
    }

    /// Preload consecutive registers starting at `start`
    pub fn with_block(mut self, start: u8, data: &[u8]) -> Self {
        let start = start as usize;
        self.registers[start..start + data.len()].copy_from_slice(data);
        self
    }

    pub fn fail_read_on(mut self, register: u8) -> Self {
        self.fail_read_on = Some(register);
        self
    }

    pub fn fail_write_on(mut self, register: u8) -> Self {
        self.fail_write_on = Some(register);
        self
    }

    /// Truncate every burst read to at most `limit` bytes
    pub fn truncate_bursts(mut self, limit: usize) -> Self {
        self.burst_limit = Some(limit);
        self
    }

    /// Append `extra` zero bytes to every burst read
    pub fn pad_bursts(mut self, extra: usize) -> Self {
        self.burst_padding = extra;
        self
    }

    pub fn journal(&self) -> MockJournal {
        self.journal.clone()
    }

    pub fn register(&self, register: u8) -> u8 {
        self.registers[register as usize]
    }

    fn record(&self, transaction: BusTransaction) {
        self.journal.lock().transactions.push(transaction);
    }

    fn check_read(&self, register: u8) -> BusResult<()> {
        if self.fail_read_on == Some(register) {
            return Err(BusError::Transfer {
                register,
                reason: "injected read failure".to_string(),
            });
        }
        Ok(())
    }
}

impl RegisterBus for MockBus {
    fn read_byte(&mut self, register: u8) -> BusResult<u8> {
        self.record(BusTransaction::ReadByte { register });
        self.check_read(register)?;
        Ok(self.registers[register as usize])
    }

    fn write_byte(&mut self, register: u8, value: u8) -> BusResult<()> {
        self.record(BusTransaction::WriteByte { register, value });
        if self.fail_write_on == Some(register) {
            return Err(BusError::Transfer {
                register,
                reason: "injected write failure".to_string(),
            });
        }
        self.registers[register as usize] = value;
        Ok(())
    }

    fn read_burst(&mut self, register: u8, count: usize) -> BusResult<Vec<u8>> {
        self.record(BusTransaction::ReadBurst { register, count });
        self.check_read(register)?;

        let start = register as usize;
        let end = (start + count).min(self.registers.len());
        let mut data = self.registers[start..end].to_vec();
        if let Some(limit) = self.burst_limit {
            data.truncate(limit);
        }
        data.resize(data.len() + self.burst_padding, 0);
        Ok(data)
    }
}

impl Drop for MockBus {
    fn drop(&mut self) {
        self.journal.lock().closes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_write_then_read() {
        let mut bus = MockBus::new();
        bus.write_byte(0x2A, 0x05).unwrap();
        assert_eq!(bus.read_byte(0x2A).unwrap(), 0x05);

        assert_eq!(
            bus.journal().transactions(),
            vec![
                BusTransaction::WriteByte { register: 0x2A, value: 0x05 },
                BusTransaction::ReadByte { register: 0x2A },
            ]
        );
    }

    #[test]
    fn test_mock_burst_reads_consecutive_registers() {
        let mut bus = MockBus::new().with_block(0x01, &[0xAA, 0xBB, 0xCC]);
        assert_eq!(bus.read_burst(0x01, 3).unwrap(), vec![0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn test_mock_truncated_burst() {
        let mut bus = MockBus::new().truncate_bursts(4);
        assert_eq!(bus.read_burst(0x01, 12).unwrap().len(), 4);
    }

    #[test]
    fn test_mock_padded_burst() {
        let mut bus = MockBus::new().pad_bursts(2);
        assert_eq!(bus.read_burst(0x01, 12).unwrap().len(), 14);
    }

    #[test]
    fn test_mock_injected_failures() {
        let mut bus = MockBus::new().fail_read_on(0x0D).fail_write_on(0x2B);
        assert!(bus.read_byte(0x0D).is_err());
        assert!(bus.write_byte(0x2B, 0x02).is_err());
        assert_eq!(bus.register(0x2B), 0x00);
    }

    #[test]
    fn test_mock_counts_close_on_drop() {
        let bus = MockBus::new();
        let journal = bus.journal();
        assert_eq!(journal.closes(), 0);
        drop(bus);
        assert_eq!(journal.closes(), 1);
    }
}
