//! The schema.org business-type taxonomy used by location records.
//!
//! A static child→parent table over the subtree the plugin offers; enough to
//! answer descendant queries (`priceRange` and the payment properties only
//! apply to `LocalBusiness` descendants).

/// Root of the local-business subtree.
pub const LOCAL_BUSINESS: &str = "LocalBusiness";

/// Root of the whole taxonomy.
pub const ORGANIZATION: &str = "Organization";

/// Child → parent edges. `Organization` is the root and has no entry.
const PARENTS: &[(&str, &str)] = &[
    ("LocalBusiness", "Organization"),
    ("AnimalShelter", "LocalBusiness"),
    ("AutomotiveBusiness", "LocalBusiness"),
    ("AutoDealer", "AutomotiveBusiness"),
    ("AutoRepair", "AutomotiveBusiness"),
    ("GasStation", "AutomotiveBusiness"),
    ("ChildCare", "LocalBusiness"),
    ("DryCleaningOrLaundry", "LocalBusiness"),
    ("EmergencyService", "LocalBusiness"),
    ("EntertainmentBusiness", "LocalBusiness"),
    ("MovieTheater", "EntertainmentBusiness"),
    ("NightClub", "EntertainmentBusiness"),
    ("FinancialService", "LocalBusiness"),
    ("AccountingService", "FinancialService"),
    ("BankOrCreditUnion", "FinancialService"),
    ("InsuranceAgency", "FinancialService"),
    ("FoodEstablishment", "LocalBusiness"),
    ("Bakery", "FoodEstablishment"),
    ("BarOrPub", "FoodEstablishment"),
    ("Brewery", "FoodEstablishment"),
    ("CafeOrCoffeeShop", "FoodEstablishment"),
    ("FastFoodRestaurant", "FoodEstablishment"),
    ("IceCreamShop", "FoodEstablishment"),
    ("Restaurant", "FoodEstablishment"),
    ("Winery", "FoodEstablishment"),
    ("HealthAndBeautyBusiness", "LocalBusiness"),
    ("BeautySalon", "HealthAndBeautyBusiness"),
    ("DaySpa", "HealthAndBeautyBusiness"),
    ("HairSalon", "HealthAndBeautyBusiness"),
    ("HomeAndConstructionBusiness", "LocalBusiness"),
    ("Electrician", "HomeAndConstructionBusiness"),
    ("GeneralContractor", "HomeAndConstructionBusiness"),
    ("HVACBusiness", "HomeAndConstructionBusiness"),
    ("Locksmith", "HomeAndConstructionBusiness"),
    ("Plumber", "HomeAndConstructionBusiness"),
    ("RoofingContractor", "HomeAndConstructionBusiness"),
    ("LegalService", "LocalBusiness"),
    ("Attorney", "LegalService"),
    ("Notary", "LegalService"),
    ("LodgingBusiness", "LocalBusiness"),
    ("BedAndBreakfast", "LodgingBusiness"),
    ("Hostel", "LodgingBusiness"),
    ("Hotel", "LodgingBusiness"),
    ("Motel", "LodgingBusiness"),
    ("Resort", "LodgingBusiness"),
    ("MedicalBusiness", "LocalBusiness"),
    ("Dentist", "MedicalBusiness"),
    ("MedicalClinic", "MedicalBusiness"),
    ("Optician", "MedicalBusiness"),
    ("Pharmacy", "MedicalBusiness"),
    ("Physician", "MedicalBusiness"),
    ("VeterinaryCare", "MedicalBusiness"),
    ("ProfessionalService", "LocalBusiness"),
    ("RealEstateAgent", "LocalBusiness"),
    ("SelfStorage", "LocalBusiness"),
    ("SportsActivityLocation", "LocalBusiness"),
    ("ExerciseGym", "SportsActivityLocation"),
    ("GolfCourse", "SportsActivityLocation"),
    ("HealthClub", "SportsActivityLocation"),
    ("Store", "LocalBusiness"),
    ("BikeStore", "Store"),
    ("BookStore", "Store"),
    ("ClothingStore", "Store"),
    ("ComputerStore", "Store"),
    ("ConvenienceStore", "Store"),
    ("DepartmentStore", "Store"),
    ("ElectronicsStore", "Store"),
    ("Florist", "Store"),
    ("FurnitureStore", "Store"),
    ("GardenStore", "Store"),
    ("GroceryStore", "Store"),
    ("HardwareStore", "Store"),
    ("JewelryStore", "Store"),
    ("LiquorStore", "Store"),
    ("PetStore", "Store"),
    ("ShoeStore", "Store"),
    ("SportingGoodsStore", "Store"),
    ("ToyStore", "Store"),
    ("TouristInformationCenter", "LocalBusiness"),
    ("TravelAgency", "LocalBusiness"),
    ("Airline", "Organization"),
    ("Corporation", "Organization"),
    ("EducationalOrganization", "Organization"),
    ("GovernmentOrganization", "Organization"),
    ("NGO", "Organization"),
    ("PerformingGroup", "Organization"),
    ("SportsOrganization", "Organization"),
];

/// The parent type of `ty`, if `ty` is in the taxonomy and is not the root.
#[must_use]
pub fn parent_of(ty: &str) -> Option<&'static str> {
    PARENTS.iter().find(|(child, _)| *child == ty).map(|(_, parent)| *parent)
}

/// Whether `ty` appears in the taxonomy at all.
#[must_use]
pub fn is_known(ty: &str) -> bool {
    ty == ORGANIZATION || PARENTS.iter().any(|(child, _)| *child == ty)
}

/// Whether `ty` equals `ancestor` or descends from it.
///
/// Unknown types have no ancestry: `is_descendant_of("Foo", "Organization")`
/// is false.
#[must_use]
pub fn is_descendant_of(ty: &str, ancestor: &str) -> bool {
    if !is_known(ty) {
        return false;
    }
    let mut current = ty;
    // The table is a tree a handful of levels deep; the bound only guards
    // against a malformed edit introducing a cycle.
    for _ in 0..PARENTS.len() {
        if current == ancestor {
            return true;
        }
        match parent_of(current) {
            Some(parent) => current = parent,
            None => return false,
        }
    }
    false
}
