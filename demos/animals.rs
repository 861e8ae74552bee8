use cssb_rs::log_init::init_from_env;
use cssb_rs::{Animal, Cat, Dog, Rectangle, Result, get_json};

fn main() -> Result<()> {
    init_from_env()?;

    let dog = Dog::new("Spike", "gav-gav!");
    let cat = Cat::new("Barsik", "meow-meow!");

    println!("{}", dog.name());
    println!("{}", dog.say());
    println!("{}", dog.guard());

    println!("{}", cat.name());
    println!("{}", cat.say());
    println!("{}", cat.be_cute());

    let r = Rectangle::new(10.0, 20.0);
    println!("{} => area {}", get_json(&r)?, r.area());
    Ok(())
}
