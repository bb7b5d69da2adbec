//! Periodic message producer

use pico_cadence_core::traits::Tick;

use crate::core::scheduler::TaskContext;
use crate::queue::StreamQueue;

/// Push `message` into `queue` byte by byte
///
/// A byte that cannot be enqueued within `timeout` ticks is dropped and the
/// rest of the message is still attempted. Returns the number of bytes that
/// were enqueued.
pub async fn send_message<const N: usize>(
    queue: &StreamQueue<N>,
    message: &[u8],
    timeout: Tick,
) -> usize {
    let mut sent = 0;
    for &byte in message {
        match queue.send(byte, timeout).await {
            Ok(()) => sent += 1,
            Err(e) => crate::log_debug!("Transmitter: dropped byte {}: {}", byte, e.as_str()),
        }
    }
    sent
}

/// Transmitter loop: send the whole message once per period
pub async fn periodic_transmitter<const N: usize>(
    ctx: TaskContext<'_>,
    queue: &StreamQueue<N>,
    message: &[u8],
    timeout: Tick,
) {
    let mut cursor = ctx.start_cursor();

    crate::log_info!("{} started", ctx.meta().name);

    loop {
        let iteration = ctx.begin();

        let sent = send_message(queue, message, timeout).await;
        if sent < message.len() {
            crate::log_debug!(
                "{}: {} of {} bytes dropped",
                ctx.meta().name,
                message.len() - sent,
                message.len()
            );
        }

        ctx.complete(iteration);
        ctx.wait_next_period(&mut cursor).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{MESSAGE, MESSAGE_LEN, SEND_TIMEOUT};

    #[tokio::test]
    #[serial_test::serial]
    async fn test_send_message_into_empty_queue() {
        let queue: StreamQueue<MESSAGE_LEN> = StreamQueue::new();
        let sent = send_message(&queue, MESSAGE, SEND_TIMEOUT).await;

        assert_eq!(sent, MESSAGE_LEN);
        let mut rx = [0u8; MESSAGE_LEN];
        assert_eq!(queue.drain_into(&mut rx), MESSAGE_LEN);
        assert_eq!(&rx, MESSAGE);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_send_message_drops_on_timeout() {
        let queue: StreamQueue<4> = StreamQueue::new();
        let started = std::time::Instant::now();

        let sent = send_message(&queue, b"abcdef", 5).await;

        // Two bytes time out; the queue keeps the first four
        assert_eq!(sent, 4);
        assert!(started.elapsed() >= std::time::Duration::from_millis(9));
        let mut rx = [0u8; 4];
        assert_eq!(queue.drain_into(&mut rx), 4);
        assert_eq!(&rx, b"abcd");
    }
}
