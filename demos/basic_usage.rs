// ============================================================================
// Basic Usage Example
// ============================================================================

use intmath::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Integer Math Example ===\n");

    let strategy = OverflowStrategy::detect();
    println!("Overflow strategy: {}\n", strategy);

    // Mean never forms the (overflowing) sum
    println!("Means:");
    println!("  mean(u8::MAX, u8::MAX)   = {}", mean(u8::MAX, u8::MAX));
    println!("  mean(i64::MIN, i64::MAX) = {}", mean(i64::MIN, i64::MAX));

    // Overflow flags, both strategies
    println!("\nOverflow detection:");
    for s in [OverflowStrategy::Native, OverflowStrategy::Portable] {
        let (sum, overflowed) = add_overflow(i32::MAX, 1, s);
        println!("  [{}] i32::MAX + 1 = {} (overflow: {})", s.name(), sum, overflowed);

        let (product, overflowed) = mul_overflow(-1i16, i16::MIN, s);
        println!("  [{}] -1 * i16::MIN = {} (overflow: {})", s.name(), product, overflowed);
    }

    match checked_sub(3u32, 5, strategy) {
        Ok(value) => println!("  3 - 5 = {}", value),
        Err(e) => println!("  3 - 5 failed: {}", e),
    }

    // Square roots
    println!("\nSquare roots:");
    for v in [0u64, 3, 4, 1_000_000, u64::MAX] {
        println!("  isqrt({}) = {}", v, isqrt(v));
    }

    // Domain error goes to the thread-local diagnostics
    diagnostics::clear();
    let root = isqrt(-25i32);
    let state = diagnostics::take();
    println!(
        "  isqrt(-25) = {} (error: {:?}, invalid flag: {})",
        root,
        state.error,
        state.exceptions.intersects(FpExceptions::INVALID)
    );

    // Facade with a fixed configuration
    let arith = Arithmetic::new(ArithmeticConfig::portable().with_record_domain_errors(false))
        .expect("portable configuration is always valid");
    println!("\nFacade ({}):", arith.config().overflow_strategy);
    println!("  checked_mul(i8::MIN, 2) = {:?}", arith.checked_mul(i8::MIN, 2));
    println!("  isqrt(-1) = {}", arith.isqrt(-1i64));

    println!("\n=== Example Complete ===");
}
