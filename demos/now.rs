use datedelta::{Clock, DateRange, LocalDate, SystemClock};
use datedelta::relative::{days, months, MO};

use std::env;


fn main() {
    let clock = SystemClock;
    let now = clock.now();
    println!("It is {} now", now);

    let today = clock.today();
    println!("Next Monday is {}", today + MO);
    println!("A month from now is {}", today + months(1));

    let count = env::args().nth(1)
                           .and_then(|arg| arg.parse::<i64>().ok())
                           .unwrap_or(7);

    let stop = today.add_days(count);
    println!("The next {} days:", count);
    for date in DateRange::<LocalDate>::between(today, stop) {
        println!("  {}", date);
    }

    match DateRange::new(today, stop, days(0)) {
        Ok(_)  => println!("Somehow made a range with an empty step"),
        Err(e) => println!("An empty step is refused: {}", e),
    }
}
