use super::Locale;

/// Symbolic keys for every user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Required,
    NotFound,
    Deleted,
    Created,
    Updated,
    BadRequest,
    IsExist,
    MaxLength,
    UnAuthorized,
    Forbidden,
    Unprocessable,
    Empty,
    Success,
    EmailIsExist,
    NameIsExist,
    AddFailed,
    UpdateFailed,
    DeletedFailed,
    InvalidEmail,
    PasswordsDoNotMatch,
    MustBePositive,
    OutOfRange,
    InvalidCredentials,
    InstructorNotFound,
    SubjectNotFound,
    DepartmentNotFound,
    RoleInUse,
    InternalError,
}

impl MessageKey {
    /// Text for this key in the given culture. `en-GB` shares the English table.
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::EnUs | Locale::EnGb => self.en(),
            Locale::ArEg => self.ar(),
            Locale::FrFr => self.fr(),
            Locale::DeDe => self.de(),
        }
    }

    fn en(self) -> &'static str {
        use MessageKey::*;
        match self {
            Required => "Required",
            NotFound => "Not found",
            Deleted => "Deleted successfully",
            Created => "Created successfully",
            Updated => "Updated successfully",
            BadRequest => "Bad request",
            IsExist => "Already exists",
            MaxLength => "Max length is {max}",
            UnAuthorized => "Unauthorized",
            Forbidden => "Forbidden",
            Unprocessable => "Unprocessable entity",
            Empty => "Must not be empty",
            Success => "Success",
            EmailIsExist => "Email already exists",
            NameIsExist => "Name already exists",
            AddFailed => "Failed to add",
            UpdateFailed => "Update failed",
            DeletedFailed => "Delete failed",
            InvalidEmail => "Invalid email address",
            PasswordsDoNotMatch => "Passwords do not match",
            MustBePositive => "Must be greater than zero",
            OutOfRange => "Must be between {min} and {max}",
            InvalidCredentials => "Invalid user name or password",
            InstructorNotFound => "Instructor not found",
            SubjectNotFound => "Subject not found",
            DepartmentNotFound => "Department not found",
            RoleInUse => "Role is assigned to users",
            InternalError => "An unexpected error occurred",
        }
    }

    fn ar(self) -> &'static str {
        use MessageKey::*;
        match self {
            Required => "مطلوب",
            NotFound => "غير موجود",
            Deleted => "تم الحذف بنجاح",
            Created => "تمت الإضافة بنجاح",
            Updated => "تم التعديل بنجاح",
            BadRequest => "طلب غير صالح",
            IsExist => "موجود بالفعل",
            MaxLength => "أقصى طول هو {max}",
            UnAuthorized => "غير مصرح",
            Forbidden => "ممنوع",
            Unprocessable => "لا يمكن معالجة الطلب",
            Empty => "لا يجب أن يكون فارغا",
            Success => "تم بنجاح",
            EmailIsExist => "البريد الإلكتروني موجود بالفعل",
            NameIsExist => "الاسم موجود بالفعل",
            AddFailed => "فشلت الإضافة",
            UpdateFailed => "فشل التعديل",
            DeletedFailed => "فشل الحذف",
            InvalidEmail => "بريد إلكتروني غير صالح",
            PasswordsDoNotMatch => "كلمتا المرور غير متطابقتين",
            MustBePositive => "يجب أن يكون أكبر من صفر",
            OutOfRange => "يجب أن يكون بين {min} و {max}",
            InvalidCredentials => "اسم المستخدم أو كلمة المرور غير صحيحة",
            InstructorNotFound => "المدرس غير موجود",
            SubjectNotFound => "المادة غير موجودة",
            DepartmentNotFound => "القسم غير موجود",
            RoleInUse => "الدور مسند لمستخدمين",
            InternalError => "حدث خطأ غير متوقع",
        }
    }

    fn fr(self) -> &'static str {
        use MessageKey::*;
        match self {
            Required => "Obligatoire",
            NotFound => "Introuvable",
            Deleted => "Supprimé avec succès",
            Created => "Créé avec succès",
            Updated => "Mis à jour avec succès",
            BadRequest => "Requête invalide",
            IsExist => "Existe déjà",
            MaxLength => "La longueur maximale est {max}",
            UnAuthorized => "Non autorisé",
            Forbidden => "Interdit",
            Unprocessable => "Entité non traitable",
            Empty => "Ne doit pas être vide",
            Success => "Succès",
            EmailIsExist => "L'adresse e-mail existe déjà",
            NameIsExist => "Le nom existe déjà",
            AddFailed => "Échec de l'ajout",
            UpdateFailed => "Échec de la mise à jour",
            DeletedFailed => "Échec de la suppression",
            InvalidEmail => "Adresse e-mail invalide",
            PasswordsDoNotMatch => "Les mots de passe ne correspondent pas",
            MustBePositive => "Doit être supérieur à zéro",
            OutOfRange => "Doit être compris entre {min} et {max}",
            InvalidCredentials => "Nom d'utilisateur ou mot de passe invalide",
            InstructorNotFound => "Enseignant introuvable",
            SubjectNotFound => "Matière introuvable",
            DepartmentNotFound => "Département introuvable",
            RoleInUse => "Le rôle est attribué à des utilisateurs",
            InternalError => "Une erreur inattendue s'est produite",
        }
    }

    fn de(self) -> &'static str {
        use MessageKey::*;
        match self {
            Required => "Erforderlich",
            NotFound => "Nicht gefunden",
            Deleted => "Erfolgreich gelöscht",
            Created => "Erfolgreich erstellt",
            Updated => "Erfolgreich aktualisiert",
            BadRequest => "Ungültige Anfrage",
            IsExist => "Existiert bereits",
            MaxLength => "Die maximale Länge ist {max}",
            UnAuthorized => "Nicht autorisiert",
            Forbidden => "Verboten",
            Unprocessable => "Nicht verarbeitbare Anfrage",
            Empty => "Darf nicht leer sein",
            Success => "Erfolgreich",
            EmailIsExist => "E-Mail-Adresse existiert bereits",
            NameIsExist => "Name existiert bereits",
            AddFailed => "Hinzufügen fehlgeschlagen",
            UpdateFailed => "Aktualisierung fehlgeschlagen",
            DeletedFailed => "Löschen fehlgeschlagen",
            InvalidEmail => "Ungültige E-Mail-Adresse",
            PasswordsDoNotMatch => "Passwörter stimmen nicht überein",
            MustBePositive => "Muss größer als null sein",
            OutOfRange => "Muss zwischen {min} und {max} liegen",
            InvalidCredentials => "Ungültiger Benutzername oder Passwort",
            InstructorNotFound => "Dozent nicht gefunden",
            SubjectNotFound => "Fach nicht gefunden",
            DepartmentNotFound => "Abteilung nicht gefunden",
            RoleInUse => "Die Rolle ist Benutzern zugewiesen",
            InternalError => "Ein unerwarteter Fehler ist aufgetreten",
        }
    }
}
