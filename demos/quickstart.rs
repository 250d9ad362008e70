use daycover::{count_free_days, free_intervals};

fn main() -> Result<(), daycover::Error> {
    let days = 10;
    let meetings = [(3, 4), (4, 8), (2, 5), (3, 8)];

    println!("free days: {}", count_free_days(days, &meetings)?);
    for gap in free_intervals(days, &meetings)? {
        println!("free: {gap}");
    }
    Ok(())
}
