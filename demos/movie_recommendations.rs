//! Movie Recommendation Example
//!
//! Demonstrates the full user-based collaborative filtering flow: load a
//! labeled rating grid, pick a target user and list size, print ranked
//! suggestions with their predicted ratings.

use recomendar::data;
use recomendar::prelude::*;

const RATINGS: &str = "\
user,Alien,Brazil,Casablanca,Delicatessen,Eraserhead
ada,5,0,3,0,1
grace,4,0,2,5,0
mary,1,5,0,4,2
joan,0,4,1,0,5
";

fn main() {
    let matrix = data::load_ratings(RATINGS.as_bytes()).expect("well-formed grid");
    println!(
        "Loaded ratings: {} users x {} movies",
        matrix.n_users(),
        matrix.n_items()
    );

    let target = 0;
    let top_n = 3;

    let recommender = UserBasedRecommender::new(matrix);
    let picks = recommender.recommend(target, top_n).expect("valid target");

    println!(
        "\nTop {} recommendations for {}:",
        top_n,
        recommender.matrix().user_label(target)
    );
    for pick in &picks {
        println!(
            "  {} (predicted rating: {:.2})",
            recommender.matrix().item_label(pick.item),
            pick.score
        );
    }
}
