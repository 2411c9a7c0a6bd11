mod city_api_tests;
mod favorite_api_tests;
mod hospitable_api_tests;
mod page_tests;
mod property_api_tests;
mod review_api_tests;
mod user_api_tests;
