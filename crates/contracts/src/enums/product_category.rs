use serde::{Deserialize, Serialize};

/// Товарные категории магазинов Favorita.
///
/// На проводе категория передаётся своим кодом (`"DAIRY"`, `"GROCERY I"`, ...),
/// ровно в том виде, в каком она была в обучающей выборке.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "AUTOMOTIVE")]
    Automotive,
    #[serde(rename = "BABY CARE")]
    BabyCare,
    #[serde(rename = "BEAUTY")]
    Beauty,
    #[serde(rename = "BEVERAGES")]
    Beverages,
    #[serde(rename = "BOOKS")]
    Books,
    #[serde(rename = "BREAD/BAKERY")]
    BreadBakery,
    #[serde(rename = "CELEBRATION")]
    Celebration,
    #[serde(rename = "CLEANING")]
    Cleaning,
    #[serde(rename = "DAIRY")]
    Dairy,
    #[serde(rename = "DELI")]
    Deli,
    #[serde(rename = "EGGS")]
    Eggs,
    #[serde(rename = "FROZEN FOODS")]
    FrozenFoods,
    #[serde(rename = "GROCERY I")]
    GroceryI,
    #[serde(rename = "GROCERY II")]
    GroceryIi,
    #[serde(rename = "HARDWARE")]
    Hardware,
    #[serde(rename = "HOME AND KITCHEN I")]
    HomeAndKitchenI,
    #[serde(rename = "HOME AND KITCHEN II")]
    HomeAndKitchenIi,
    #[serde(rename = "HOME APPLIANCES")]
    HomeAppliances,
    #[serde(rename = "HOME CARE")]
    HomeCare,
    #[serde(rename = "LADIESWEAR")]
    Ladieswear,
    #[serde(rename = "LAWN AND GARDEN")]
    LawnAndGarden,
    #[serde(rename = "LINGERIE")]
    Lingerie,
    #[serde(rename = "LIQUOR,WINE,BEER")]
    LiquorWineBeer,
    #[serde(rename = "MAGAZINES")]
    Magazines,
    #[serde(rename = "MEATS")]
    Meats,
    #[serde(rename = "PERSONAL CARE")]
    PersonalCare,
    #[serde(rename = "PET SUPPLIES")]
    PetSupplies,
    #[serde(rename = "PLAYERS AND ELECTRONICS")]
    PlayersAndElectronics,
    #[serde(rename = "POULTRY")]
    Poultry,
    #[serde(rename = "PREPARED FOODS")]
    PreparedFoods,
    #[serde(rename = "PRODUCE")]
    Produce,
    #[serde(rename = "SCHOOL AND OFFICE SUPPLIES")]
    SchoolAndOfficeSupplies,
    #[serde(rename = "SEAFOOD")]
    Seafood,
}

impl ProductCategory {
    /// Код категории (совпадает с сериализованным значением)
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Automotive => "AUTOMOTIVE",
            ProductCategory::BabyCare => "BABY CARE",
            ProductCategory::Beauty => "BEAUTY",
            ProductCategory::Beverages => "BEVERAGES",
            ProductCategory::Books => "BOOKS",
            ProductCategory::BreadBakery => "BREAD/BAKERY",
            ProductCategory::Celebration => "CELEBRATION",
            ProductCategory::Cleaning => "CLEANING",
            ProductCategory::Dairy => "DAIRY",
            ProductCategory::Deli => "DELI",
            ProductCategory::Eggs => "EGGS",
            ProductCategory::FrozenFoods => "FROZEN FOODS",
            ProductCategory::GroceryI => "GROCERY I",
            ProductCategory::GroceryIi => "GROCERY II",
            ProductCategory::Hardware => "HARDWARE",
            ProductCategory::HomeAndKitchenI => "HOME AND KITCHEN I",
            ProductCategory::HomeAndKitchenIi => "HOME AND KITCHEN II",
            ProductCategory::HomeAppliances => "HOME APPLIANCES",
            ProductCategory::HomeCare => "HOME CARE",
            ProductCategory::Ladieswear => "LADIESWEAR",
            ProductCategory::LawnAndGarden => "LAWN AND GARDEN",
            ProductCategory::Lingerie => "LINGERIE",
            ProductCategory::LiquorWineBeer => "LIQUOR,WINE,BEER",
            ProductCategory::Magazines => "MAGAZINES",
            ProductCategory::Meats => "MEATS",
            ProductCategory::PersonalCare => "PERSONAL CARE",
            ProductCategory::PetSupplies => "PET SUPPLIES",
            ProductCategory::PlayersAndElectronics => "PLAYERS AND ELECTRONICS",
            ProductCategory::Poultry => "POULTRY",
            ProductCategory::PreparedFoods => "PREPARED FOODS",
            ProductCategory::Produce => "PRODUCE",
            ProductCategory::SchoolAndOfficeSupplies => "SCHOOL AND OFFICE SUPPLIES",
            ProductCategory::Seafood => "SEAFOOD",
        }
    }

    /// Все категории в алфавитном порядке (так же, как в выпадающем списке)
    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Automotive,
            ProductCategory::BabyCare,
            ProductCategory::Beauty,
            ProductCategory::Beverages,
            ProductCategory::Books,
            ProductCategory::BreadBakery,
            ProductCategory::Celebration,
            ProductCategory::Cleaning,
            ProductCategory::Dairy,
            ProductCategory::Deli,
            ProductCategory::Eggs,
            ProductCategory::FrozenFoods,
            ProductCategory::GroceryI,
            ProductCategory::GroceryIi,
            ProductCategory::Hardware,
            ProductCategory::HomeAndKitchenI,
            ProductCategory::HomeAndKitchenIi,
            ProductCategory::HomeAppliances,
            ProductCategory::HomeCare,
            ProductCategory::Ladieswear,
            ProductCategory::LawnAndGarden,
            ProductCategory::Lingerie,
            ProductCategory::LiquorWineBeer,
            ProductCategory::Magazines,
            ProductCategory::Meats,
            ProductCategory::PersonalCare,
            ProductCategory::PetSupplies,
            ProductCategory::PlayersAndElectronics,
            ProductCategory::Poultry,
            ProductCategory::PreparedFoods,
            ProductCategory::Produce,
            ProductCategory::SchoolAndOfficeSupplies,
            ProductCategory::Seafood,
        ]
    }

    /// Порядковый номер категории в списке `all()`
    pub fn ordinal(&self) -> usize {
        Self::all()
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

impl Default for ProductCategory {
    fn default() -> Self {
        ProductCategory::Automotive
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
