pub mod navigation_service;
