//! Indian-locale name tables.

use rand::Rng;

use crate::sampling::pick;

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Aditi", "Aditya", "Advik", "Ananya", "Anika", "Arjun", "Aryan", "Ayaan", "Bhavna",
    "Chetan", "Darsh", "Deepika", "Dhruv", "Divya", "Gaurav", "Hansa", "Harsh", "Ishaan", "Ishita",
    "Jiya", "Kabir", "Kavya", "Krish", "Lakshmi", "Madhav", "Meera", "Mohan", "Myra", "Neha",
    "Nikhil", "Nisha", "Ojas", "Pari", "Pooja", "Pranav", "Priya", "Rahul", "Reyansh", "Riya",
    "Rohan", "Saanvi", "Sai", "Sanjay", "Sara", "Shaurya", "Shreya", "Siddharth", "Sneha", "Tara",
    "Tanvi", "Uday", "Vaibhav", "Vihaan", "Vivaan", "Yash", "Zara", "Aadhya", "Kiara", "Vanya",
];

const LAST_NAMES: &[&str] = &[
    "Agarwal", "Ahluwalia", "Bajwa", "Banerjee", "Bhatt", "Chadha", "Chaudhary", "Chopra", "Das",
    "Desai", "Dutta", "Gandhi", "Ghosh", "Gill", "Goel", "Gupta", "Iyer", "Jain", "Joshi", "Kapoor",
    "Khanna", "Kohli", "Krishnan", "Kulkarni", "Mehta", "Menon", "Mishra", "Nair", "Pandey",
    "Patel", "Pillai", "Rao", "Reddy", "Saini", "Sethi", "Shah", "Sharma", "Singh", "Sinha",
    "Srinivasan", "Thakur", "Trivedi", "Varma", "Verma", "Yadav",
];

const PREFIXES: &[&str] = &["Dr.", "Mr.", "Mrs.", "Ms."];

/// One in twenty names carries an honorific.
const PREFIX_ODDS: (u32, u32) = (1, 20);

pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    if rng.gen_ratio(PREFIX_ODDS.0, PREFIX_ODDS.1) {
        format!("{} {first} {last}", pick(rng, PREFIXES))
    } else {
        format!("{first} {last}")
    }
}
