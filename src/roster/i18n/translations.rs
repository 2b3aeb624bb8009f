use super::Language;

pub(super) fn lookup(language: Language, key: &str) -> Option<&'static str> {
    match language {
        Language::Tr => turkish(key),
        Language::En => english(key),
    }
}

fn turkish(key: &str) -> Option<&'static str> {
    let text = match key {
        "employees" => "Çalışanlar",
        "employeeList" => "Çalışan Listesi",
        "addNew" => "Yeni Ekle",
        "addEmployee" => "Çalışan Ekle",
        "editEmployee" => "Çalışanı Düzenle",
        "firstName" => "Ad",
        "lastName" => "Soyad",
        "dateOfEmployment" => "İşe Başlama Tarihi",
        "dateOfBirth" => "Doğum Tarihi",
        "phone" => "Telefon",
        "email" => "E-posta",
        "department" => "Departman",
        "position" => "Pozisyon",
        "actions" => "İşlemler",
        "analytics" => "Analitik",
        "tech" => "Teknoloji",
        "junior" => "Junior",
        "medior" => "Medior",
        "senior" => "Senior",
        "search" => "Ara",
        "tableView" => "Tablo Görünümü",
        "listView" => "Liste Görünümü",
        "noRecords" => "Kayıt bulunamadı",
        "edit" => "Düzenle",
        "delete" => "Sil",
        "save" => "Kaydet",
        "cancel" => "İptal",
        "confirm" => "Onayla",
        "proceed" => "Devam Et",
        "deleteConfirmation" => "Emin misiniz?",
        "deleteConfirmationMessage" => "Seçilen çalışan kaydı silinecek",
        "requiredField" => "Bu alan zorunludur",
        "invalidEmail" => "Geçerli bir e-posta adresi giriniz",
        "invalidPhone" => "Geçerli bir telefon numarası giriniz",
        "employeeAdded" => "Çalışan eklendi",
        "employeeUpdated" => "Çalışan güncellendi",
        "employeeDeleted" => "Çalışan silindi",
        "deleteCancelled" => "Silme işlemi iptal edildi",
        "page" => "Sayfa",
        "selected" => "seçili",
        "languageChanged" => "Dil değiştirildi",
        _ => return None,
    };
    Some(text)
}

fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        "employees" => "Employees",
        "employeeList" => "Employee List",
        "addNew" => "Add New",
        "addEmployee" => "Add Employee",
        "editEmployee" => "Edit Employee",
        "firstName" => "First Name",
        "lastName" => "Last Name",
        "dateOfEmployment" => "Date of Employment",
        "dateOfBirth" => "Date of Birth",
        "phone" => "Phone",
        "email" => "Email",
        "department" => "Department",
        "position" => "Position",
        "actions" => "Actions",
        "analytics" => "Analytics",
        "tech" => "Tech",
        "junior" => "Junior",
        "medior" => "Medior",
        "senior" => "Senior",
        "search" => "Search",
        "tableView" => "Table View",
        "listView" => "List View",
        "noRecords" => "No records found",
        "edit" => "Edit",
        "delete" => "Delete",
        "save" => "Save",
        "cancel" => "Cancel",
        "confirm" => "Confirm",
        "proceed" => "Proceed",
        "deleteConfirmation" => "Are you sure?",
        "deleteConfirmationMessage" => "The selected employee record will be deleted",
        "requiredField" => "This field is required",
        "invalidEmail" => "Please enter a valid email address",
        "invalidPhone" => "Please enter a valid phone number",
        "employeeAdded" => "Employee added",
        "employeeUpdated" => "Employee updated",
        "employeeDeleted" => "Employee deleted",
        "deleteCancelled" => "Deletion cancelled",
        "page" => "Page",
        "selected" => "selected",
        "languageChanged" => "Language changed",
        _ => return None,
    };
    Some(text)
}
