use libwintype::prelude::*;

fn main() {
    let win = std::env::args().nth(1).map(|arg| parse_window_id(&arg).unwrap());
    let classifier = Classifier::connect(None).unwrap();
    let win = win.unwrap_or(classifier.root());
    println!("X11 Window Type");
    println!("-----------------------------------------------------------------------");
    println!("Screen:      {}", classifier.screen());
    println!("Root Window: {}", classifier.root());
    println!("Window:      {}", win);
    match classifier.classify(win) {
        Some(name) => {
            println!("Type Name:   {}", name);
            println!("Type:        {}", classifier.win_type(win).unwrap());
        },
        None => println!("Type Name:   none"),
    }
}
