//! Queue consumer and output writer
//!
//! Each period the receiver polls both button queues, then forwards a
//! complete message from the stream queue once one is buffered. A partial
//! message that gains no bytes over a whole period is discarded, so a byte
//! dropped by the transmitter costs only that one message. Output failures
//! are logged and the iteration carries on.

use core::fmt::Write as _;

use heapless::String;
use pico_cadence_core::queue::Edge;

use crate::core::scheduler::TaskContext;
use crate::platform::UartInterface;
use crate::queue::{SamplingQueue, StreamQueue};

/// Written in place of an edge report so an idle poll costs about as much
const IDLE_FILL: &[u8] = b"     ";

/// What one receiver iteration wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReceiverStep {
    /// Edge reports written, one per button at most
    pub edges_reported: u8,
    /// Message bytes forwarded from the stream queue
    pub forwarded: usize,
    /// Bytes of a stale partial message dropped from the stream queue
    pub discarded: usize,
}

/// Consumer of both button queues and the message stream
pub struct UartReceiver<'q, U: UartInterface, const N: usize> {
    uart: U,
    buttons: [&'q SamplingQueue<Edge>; 2],
    stream: &'q StreamQueue<N>,
    message_len: usize,
    /// Stream length left behind by the previous iteration
    pending: usize,
}

impl<'q, U: UartInterface, const N: usize> UartReceiver<'q, U, N> {
    /// Receiver forwarding `message_len`-byte messages (clamped to `N`)
    pub fn new(
        uart: U,
        button_1: &'q SamplingQueue<Edge>,
        button_2: &'q SamplingQueue<Edge>,
        stream: &'q StreamQueue<N>,
        message_len: usize,
    ) -> Self {
        Self {
            uart,
            buttons: [button_1, button_2],
            stream,
            message_len: message_len.min(N),
            pending: 0,
        }
    }

    /// Run one iteration's work
    pub fn step(&mut self) -> ReceiverStep {
        let mut step = ReceiverStep::default();

        for (index, queue) in self.buttons.iter().enumerate() {
            match queue.try_read() {
                Some(edge) if edge.is_transition() => {
                    let line = edge_line(index + 1, edge);
                    emit(&mut self.uart, b"\n");
                    emit(&mut self.uart, line.as_bytes());
                    step.edges_reported += 1;
                }
                _ => emit(&mut self.uart, IDLE_FILL),
            }
        }

        let len = self.stream.len();
        if self.message_len > 0 && len >= self.message_len {
            let mut rx = [0u8; N];
            let count = self.stream.drain_into(&mut rx[..self.message_len]);
            emit(&mut self.uart, &rx[..count]);
            self.stream.reset();
            step.forwarded = count;
            self.pending = 0;
        } else if len > 0 && len == self.pending {
            // Nothing arrived for a whole period: the message is incomplete
            self.stream.reset();
            step.discarded = len;
            self.pending = 0;
            crate::log_debug!("Receiver: discarded {} byte partial message", len);
        } else {
            self.pending = len;
        }

        step
    }

    /// Output sink
    pub fn uart(&self) -> &U {
        &self.uart
    }
}

/// `" Button k: Rising edge \n"` or `" Button k: Falling edge \n"`
fn edge_line(button: usize, edge: Edge) -> String<32> {
    let kind = match edge {
        Edge::Rising => "Rising",
        _ => "Falling",
    };
    let mut line = String::new();
    if write!(line, " Button {}: {} edge \n", button, kind).is_err() {
        crate::log_warn!("Receiver: edge report truncated");
    }
    line
}

fn emit<U: UartInterface>(uart: &mut U, bytes: &[u8]) {
    if let Err(e) = uart.write_bytes(bytes) {
        crate::log_warn!("Receiver: output write failed: {}", e);
    }
}

/// Receiver loop: one [`UartReceiver::step`] per period
pub async fn uart_receiver<U: UartInterface, const N: usize>(
    ctx: TaskContext<'_>,
    mut receiver: UartReceiver<'_, U, N>,
) {
    let mut cursor = ctx.start_cursor();

    crate::log_info!("{} started", ctx.meta().name);

    loop {
        let iteration = ctx.begin();

        let step = receiver.step();
        if step.forwarded > 0 {
            crate::log_trace!("{}: forwarded {} bytes", ctx.meta().name, step.forwarded);
        }

        ctx.complete(iteration);
        ctx.wait_next_period(&mut cursor).await;
    }
}
