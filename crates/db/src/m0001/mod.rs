mod ingredient;
mod recipe;
mod recipe_ingredient;
mod shopping_cart;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "foodgram",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        ingredient::CreateTable,
        ingredient::CreateUk1,
        recipe::CreateTable,
        recipe::CreateIdx1,
        recipe_ingredient::CreateTable,
        shopping_cart::CreateTable,
        shopping_cart::CreateIdx1
    ]
);
