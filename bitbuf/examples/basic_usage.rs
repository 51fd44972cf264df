use bitbuf::{BitBuf, BitBufError};

fn main() {
    println!("=== BitBuf Examples ===\n");

    // Example 1: Building buffers
    let _ = example_construction();

    // Example 2: Masks
    let _ = example_masks();

    // Example 3: Shifts and rotations
    let _ = example_shift_rotate();
}

fn example_construction() -> Result<(), BitBufError> {
    println!("Example 1: Building a buffer from different sources");

    let from_int = BitBuf::from_uint(0x2C, Some(8))?;
    let from_text: BitBuf = "00101100".parse()?;
    let from_bytes = BitBuf::from_bytes(&[0x2C], None)?;

    println!("  From integer: {}", from_int);
    println!("  From text:    {}", from_text);
    println!("  From bytes:   {}", from_bytes);
    println!(
        "  All equal:    {}",
        from_int == from_text && from_text == from_bytes
    );
    println!();

    Ok(())
}

fn example_masks() -> Result<(), BitBufError> {
    println!("Example 2: Permission masks");

    let granted = BitBuf::from_bit_str("110101")?;
    let required = BitBuf::from_bit_str("100100")?;

    let mut check = granted.clone();
    check.and(&required)?;
    println!("  granted & required = {}", check);
    println!("  has all required:    {}", check == required);

    let mut missing = required.clone();
    missing.xor(&check)?;
    println!("  missing:             {} ({} bits)", missing, missing.count_ones());
    println!();

    Ok(())
}

fn example_shift_rotate() -> Result<(), BitBufError> {
    println!("Example 3: Shifts and rotations");

    let mut bits = BitBuf::from_bit_str("10010011")?;
    println!("  start:    {}", bits);
    bits.rot(3)?;
    println!("  rot(3):   {}", bits);
    bits.shift(-2)?;
    println!("  shift(-2): {}", bits);
    println!("  as int:   {}", bits.to_integer()?);

    Ok(())
}
