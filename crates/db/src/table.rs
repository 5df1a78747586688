use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    Username,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    MeasurementUnit,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    AuthorId,
    Name,
    Image,
    Text,
    CookingTime,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum RecipeIngredient {
    Table,
    RecipeId,
    IngredientId,
    Amount,
}

#[derive(Iden, Clone)]
pub enum ShoppingCart {
    Table,
    UserId,
    RecipeId,
    CreatedAt,
}
