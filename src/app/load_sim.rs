//! Synthetic CPU load tasks

use pico_cadence_core::scheduler::SyntheticLoad;

use crate::core::scheduler::TaskContext;

/// Load loop: burn `work` once per period
pub async fn load_simulation(ctx: TaskContext<'_>, work: SyntheticLoad) {
    let mut cursor = ctx.start_cursor();

    crate::log_info!("{} started", ctx.meta().name);

    loop {
        let iteration = ctx.begin();
        work.run(ctx.load().clock());
        ctx.complete(iteration);

        ctx.wait_next_period(&mut cursor).await;
    }
}
