//! Translation entries: `(key, [en, hi, mr])`.
//!
//! An empty string marks a translation that has not been written yet; the
//! lookup falls back to the key for it.

pub(super) const ENTRIES: &[(&str, [&str; 3])] = &[
    // Brand and navigation
    ("appName", ["Tribal Art Hub", "ट्राइबल आर्ट हब", "ट्रायबल आर्ट हब"]),
    ("home", ["Home", "होम", "मुख्यपृष्ठ"]),
    ("shop", ["Shop", "दुकान", "दुकान"]),
    ("cart", ["Cart", "कार्ट", "कार्ट"]),
    ("login", ["Login", "लॉग इन", "लॉग इन"]),
    ("logout", ["Logout", "लॉग आउट", "लॉग आउट"]),
    ("dashboard", ["Dashboard", "डैशबोर्ड", "डॅशबोर्ड"]),
    ("myOrders", ["My Orders", "मेरे ऑर्डर", "माझ्या ऑर्डर"]),
    ("aboutUs", ["About Us", "हमारे बारे में", "आमच्याबद्दल"]),
    ("search", ["Search products...", "उत्पाद खोजें...", "उत्पादने शोधा..."]),
    ("language", ["Language", "भाषा", "भाषा"]),
    ("admin", ["Admin", "एडमिन", "ॲडमिन"]),
    ("customer", ["Customer", "ग्राहक", "ग्राहक"]),
    ("producer", ["Producer", "उत्पादक", "उत्पादक"]),
    ("back", ["Back", "वापस", "मागे"]),
    ("welcomeBackUser", ["Welcome back", "वापसी पर स्वागत है", "पुन्हा स्वागत आहे"]),
    // Home
    ("discoverSpirit", ["Discover the spirit of India", "भारत की आत्मा को जानें", "भारताचा आत्मा अनुभवा"]),
    ("heroTitle", [
        "Authentic Tribal Art, Direct from the Artisans",
        "प्रामाणिक जनजातीय कला, सीधे कारीगरों से",
        "अस्सल आदिवासी कला, थेट कारागिरांकडून",
    ]),
    ("heroSubtitle", [
        "Every purchase supports indigenous communities and keeps centuries-old traditions alive.",
        "हर खरीद आदिवासी समुदायों का समर्थन करती है और सदियों पुरानी परंपराओं को जीवित रखती है।",
        "प्रत्येक खरेदी आदिवासी समुदायांना आधार देते आणि शतकानुशतके जुन्या परंपरा जिवंत ठेवते.",
    ]),
    ("learnMore", ["Learn More", "और जानें", "अधिक जाणून घ्या"]),
    ("exploreCategories", ["Explore Categories", "श्रेणियाँ देखें", "श्रेणी पहा"]),
    ("featuredItems", ["Featured Items", "विशेष उत्पाद", "वैशिष्ट्यपूर्ण वस्तू"]),
    ("viewAll", ["View All", "सभी देखें", "सर्व पहा"]),
    ("meetArtisans", ["Meet Our Artisans", "हमारे कारीगरों से मिलें", "आमच्या कारागिरांना भेटा"]),
    ("artisanSubtitle", [
        "The hands and hearts behind every piece.",
        "हर कृति के पीछे के हाथ और दिल।",
        "प्रत्येक कलाकृतीमागचे हात आणि हृदय.",
    ]),
    ("artisanCount", ["Artisans", "कारीगर", "कारागीर"]),
    ("productsCount", ["Products", "उत्पाद", "उत्पादने"]),
    ("regArtisans", ["Registered Artisans", "पंजीकृत कारीगर", "नोंदणीकृत कारागीर"]),
    ("aboutDesc", [
        "We connect tribal artisans from across India with people who value handmade work.",
        "हम पूरे भारत के आदिवासी कारीगरों को हस्तनिर्मित कला के कद्रदानों से जोड़ते हैं।",
        "आम्ही भारतभरातील आदिवासी कारागिरांना हस्तकलेची कदर करणाऱ्या लोकांशी जोडतो.",
    ]),
    ("testimonialQuote", [
        "The Dhokra elephant I bought is the centrepiece of our home. Knowing who made it makes it special.",
        "मैंने जो ढोकरा हाथी खरीदा वह हमारे घर की शोभा है। यह जानना कि इसे किसने बनाया, इसे खास बनाता है।",
        "मी घेतलेला ढोकरा हत्ती आमच्या घराची शोभा आहे. तो कोणी बनवला हे माहीत असल्याने तो खास वाटतो.",
    ]),
    ("testimonialAuthor", ["Ananya, Bengaluru", "अनन्या, बेंगलुरु", "अनन्या, बेंगळुरू"]),
    ("visitStudio", ["Visit Studio", "स्टूडियो देखें", "स्टुडिओ पहा"]),
    // Categories
    ("allCategories", ["All Categories", "सभी श्रेणियाँ", "सर्व श्रेणी"]),
    ("paintings", ["Paintings", "चित्रकला", "चित्रकला"]),
    ("handicrafts", ["Handicrafts", "हस्तशिल्प", "हस्तकला"]),
    ("statues", ["Statues", "मूर्तियाँ", "मूर्ती"]),
    ("minerals", ["Minerals", "खनिज", "खनिजे"]),
    ("fruits", ["Forest Produce", "वन उपज", "वनोपज"]),
    ("clothing", ["Clothing", "वस्त्र", "वस्त्रे"]),
    ("instruments", ["Instruments", "वाद्य यंत्र", "वाद्ये"]),
    ("cultural", ["Cultural Items", "सांस्कृतिक वस्तुएँ", "सांस्कृतिक वस्तू"]),
    // Extra craft options offered at artisan registration
    ("pottery", ["Pottery", "मिट्टी के बर्तन", "कुंभारकाम"]),
    ("weaving", ["Weaving", "बुनाई", "विणकाम"]),
    ("jewelry", ["Jewelry", "आभूषण", "दागिने"]),
    ("woodCarving", ["Wood Carving", "नक्काशी", "काष्ठकला"]),
    ("metalWork", ["Metal Work", "धातु शिल्प", "धातूकाम"]),
    ("terracotta", ["Terracotta", "टेराकोटा", "टेराकोटा"]),
    // Shop and product
    ("noProducts", ["No products found", "कोई उत्पाद नहीं मिला", "कोणतेही उत्पादन आढळले नाही"]),
    ("tryAdjusting", [
        "Try adjusting your search or filter.",
        "अपनी खोज या फ़िल्टर बदलकर देखें।",
        "तुमचा शोध किंवा फिल्टर बदलून पहा.",
    ]),
    ("viewDetails", ["View Details", "विवरण देखें", "तपशील पहा"]),
    ("addToCart", ["Add to Cart", "कार्ट में डालें", "कार्टमध्ये टाका"]),
    ("buyNow", ["Buy Now", "अभी खरीदें", "आता खरेदी करा"]),
    ("stock", ["In stock", "स्टॉक में", "साठा"]),
    ("outOfStockLabel", ["Out of stock", "स्टॉक में नहीं", "साठा संपला"]),
    ("description", ["Description", "विवरण", "वर्णन"]),
    ("category", ["Category", "श्रेणी", "श्रेणी"]),
    ("price", ["Price", "कीमत", "किंमत"]),
    ("reviews", ["Reviews", "समीक्षाएँ", "पुनरावलोकने"]),
    ("noReviews", ["No reviews yet.", "अभी कोई समीक्षा नहीं।", "अद्याप पुनरावलोकन नाही."]),
    ("writeReview", ["Write a Review", "समीक्षा लिखें", "पुनरावलोकन लिहा"]),
    ("rating", ["Rating", "रेटिंग", "रेटिंग"]),
    ("submitReview", ["Submit Review", "समीक्षा भेजें", "पुनरावलोकन पाठवा"]),
    ("loginToReview", [
        "Please log in to write a review.",
        "समीक्षा लिखने के लिए लॉग इन करें।",
        "पुनरावलोकन लिहिण्यासाठी लॉग इन करा.",
    ]),
    ("soldBy", ["Sold by", "विक्रेता", "विक्रेता"]),
    // Cart and checkout
    ("emptyCart", ["Your cart is empty", "आपका कार्ट खाली है", "तुमचा कार्ट रिकामा आहे"]),
    ("continueShopping", ["Continue Shopping", "खरीदारी जारी रखें", "खरेदी सुरू ठेवा"]),
    ("qty", ["Qty", "मात्रा", "संख्या"]),
    ("remove", ["Remove", "हटाएँ", "काढा"]),
    ("subtotal", ["Subtotal", "उप-योग", "उप-एकूण"]),
    ("gst", ["GST", "जीएसटी", "जीएसटी"]),
    ("shipping", ["Shipping", "शिपिंग", "शिपिंग"]),
    ("free", ["Free", "मुफ़्त", "मोफत"]),
    ("total", ["Total", "कुल", "एकूण"]),
    ("checkout", ["Checkout", "चेकआउट", "चेकआउट"]),
    ("secureCheckout", ["Secure Checkout", "सुरक्षित चेकआउट", "सुरक्षित चेकआउट"]),
    ("orderSummary", ["Order Summary", "ऑर्डर सारांश", "ऑर्डर सारांश"]),
    ("shippingAddress", ["Shipping Address", "शिपिंग पता", "शिपिंग पत्ता"]),
    ("fullName", ["Full Name", "पूरा नाम", "पूर्ण नाव"]),
    ("addressLabel", ["Address", "पता", "पत्ता"]),
    ("city", ["City", "शहर", "शहर"]),
    ("pincode", ["Pincode", "पिनकोड", "पिनकोड"]),
    ("phone", ["Phone", "फ़ोन", "फोन"]),
    ("confirmOrderCheck", [
        "I confirm the shipping details are correct",
        "मैं पुष्टि करता/करती हूँ कि शिपिंग विवरण सही है",
        "शिपिंग तपशील बरोबर असल्याची मी खात्री करतो/करते",
    ]),
    ("fillFieldsErr", [
        "Please fill in all required fields.",
        "कृपया सभी आवश्यक फ़ील्ड भरें।",
        "कृपया सर्व आवश्यक माहिती भरा.",
    ]),
    ("paymentMethod", ["Payment Method", "भुगतान का तरीका", "पेमेंट पद्धत"]),
    ("upi", ["UPI", "यूपीआई", "यूपीआय"]),
    ("vpa", ["UPI ID", "यूपीआई आईडी", "यूपीआय आयडी"]),
    ("card", ["Credit / Debit Card", "क्रेडिट / डेबिट कार्ड", "क्रेडिट / डेबिट कार्ड"]),
    ("cardNumber", ["Card Number", "कार्ड नंबर", "कार्ड क्रमांक"]),
    ("expiry", ["Expiry", "समाप्ति", "मुदत"]),
    ("cvv", ["CVV", "सीवीवी", "सीव्हीव्ही"]),
    ("netBanking", ["Net Banking", "नेट बैंकिंग", "नेट बँकिंग"]),
    ("cod", ["Cash on Delivery", "कैश ऑन डिलीवरी", "डिलिव्हरीवर रोख"]),
    ("payPlaceOrder", ["Pay & Place Order", "भुगतान करें और ऑर्डर दें", "पैसे भरा आणि ऑर्डर द्या"]),
    ("processingPayment", ["Processing payment...", "भुगतान हो रहा है...", "पेमेंट होत आहे..."]),
    ("secureMsg", [
        "Your payment information is encrypted and secure.",
        "आपकी भुगतान जानकारी एन्क्रिप्टेड और सुरक्षित है।",
        "तुमची पेमेंट माहिती एन्क्रिप्टेड आणि सुरक्षित आहे.",
    ]),
    ("orderSuccess", ["Order Placed Successfully!", "ऑर्डर सफलतापूर्वक दिया गया!", "ऑर्डर यशस्वीरित्या दिली!"]),
    ("thankYouOrder", [
        "Thank you for supporting tribal artisans.",
        "आदिवासी कारीगरों का समर्थन करने के लिए धन्यवाद।",
        "आदिवासी कारागिरांना पाठिंबा दिल्याबद्दल धन्यवाद.",
    ]),
    ("estDelivery", ["Estimated delivery", "अनुमानित डिलीवरी", "अंदाजे डिलिव्हरी"]),
    ("courier", ["Courier", "कूरियर", "कुरिअर"]),
    ("viewOrders", ["View My Orders", "मेरे ऑर्डर देखें", "माझ्या ऑर्डर पहा"]),
    ("goToShop", ["Go to Shop", "दुकान पर जाएँ", "दुकानात जा"]),
    ("orderId", ["Order ID", "ऑर्डर आईडी", "ऑर्डर आयडी"]),
    ("stepCart", ["Cart", "कार्ट", "कार्ट"]),
    ("stepShipping", ["Shipping", "शिपिंग", "शिपिंग"]),
    ("stepPayment", ["Payment", "भुगतान", "पेमेंट"]),
    ("stepDone", ["Done", "पूर्ण", "पूर्ण"]),
    // Orders
    ("noOrders", ["You have no orders yet.", "आपके कोई ऑर्डर नहीं हैं।", "तुमच्या कोणत्याही ऑर्डर नाहीत."]),
    ("orders", ["Orders", "ऑर्डर", "ऑर्डर"]),
    ("pending", ["Pending", "लंबित", "प्रलंबित"]),
    ("processing", ["Processing", "प्रक्रिया में", "प्रक्रियेत"]),
    ("shipped", ["Shipped", "भेजा गया", "पाठवली"]),
    ("delivered", ["Delivered", "पहुँचा दिया", "पोहोचवली"]),
    ("cancelled", ["Cancelled", "रद्द", "रद्द"]),
    ("cancelOrder", ["Cancel Order", "ऑर्डर रद्द करें", "ऑर्डर रद्द करा"]),
    ("orderCancelled", ["Order cancelled.", "ऑर्डर रद्द कर दिया गया।", "ऑर्डर रद्द केली."]),
    ("placedOn", ["Placed on", "दिनांक", "दिनांक"]),
    // Login
    ("welcomeBack", ["Welcome Back", "फिर से स्वागत है", "पुन्हा स्वागत"]),
    ("signInSub", [
        "Sign in to shop, sell or manage the marketplace.",
        "खरीदारी, बिक्री या प्रबंधन के लिए साइन इन करें।",
        "खरेदी, विक्री किंवा व्यवस्थापनासाठी साइन इन करा.",
    ]),
    ("chooseRole", ["Choose your role", "अपनी भूमिका चुनें", "तुमची भूमिका निवडा"]),
    ("customerRole", ["Customer", "ग्राहक", "ग्राहक"]),
    ("customerDesc", ["Browse and buy authentic art", "प्रामाणिक कला देखें और खरीदें", "अस्सल कला पहा आणि खरेदी करा"]),
    ("producerRole", ["Artisan / Producer", "कारीगर / उत्पादक", "कारागीर / उत्पादक"]),
    ("producerDesc", ["Sell your creations", "अपनी कृतियाँ बेचें", "तुमच्या कलाकृती विका"]),
    ("adminRole", ["Admin / Team", "एडमिन / टीम", "ॲडमिन / टीम"]),
    ("adminDesc", ["Manage the marketplace", "बाज़ार का प्रबंधन करें", "बाजाराचे व्यवस्थापन करा"]),
    ("registerLink", ["New artisan? Register", "नए कारीगर? पंजीकरण करें", "नवीन कारागीर? नोंदणी करा"]),
    ("backToRoles", ["Back to roles", "भूमिकाओं पर वापस", "भूमिकांकडे परत"]),
    ("mobileNum", ["Mobile Number", "मोबाइल नंबर", "मोबाइल क्रमांक"]),
    ("enterMobile", [
        "Enter your registered mobile number.",
        "अपना पंजीकृत मोबाइल नंबर दर्ज करें।",
        "तुमचा नोंदणीकृत मोबाइल क्रमांक टाका.",
    ]),
    ("demoNumbers", [
        "Try demo numbers: 9876543210, 9876543211",
        "डेमो नंबर आज़माएँ: 9876543210, 9876543211",
        "डेमो क्रमांक वापरा: 9876543210, 9876543211",
    ]),
    ("sendOtp", ["Send OTP", "ओटीपी भेजें", "ओटीपी पाठवा"]),
    ("enterOtp", ["Enter OTP", "ओटीपी दर्ज करें", "ओटीपी टाका"]),
    ("otpSentMsg", ["OTP sent to", "ओटीपी भेजा गया", "ओटीपी पाठवला"]),
    ("verifyLogin", ["Verify & Login", "सत्यापित करें और लॉग इन करें", "पडताळा आणि लॉग इन करा"]),
    ("resendOtp", ["Resend OTP", "ओटीपी दोबारा भेजें", "ओटीपी पुन्हा पाठवा"]),
    ("changeMobile", ["Change Mobile Number", "मोबाइल नंबर बदलें", "मोबाइल क्रमांक बदला"]),
    ("invalidMobile", [
        "Please enter a valid 10-digit mobile number.",
        "कृपया 10 अंकों का सही मोबाइल नंबर दर्ज करें।",
        "कृपया 10 अंकी वैध मोबाइल क्रमांक टाका.",
    ]),
    ("invalidOtp", ["Invalid OTP. Please try again.", "गलत ओटीपी। फिर से प्रयास करें।", "चुकीचा ओटीपी. पुन्हा प्रयत्न करा."]),
    ("otpExpired", [
        "That OTP has expired. Please request a new one.",
        "ओटीपी की समय सीमा समाप्त हो गई। नया ओटीपी मँगाएँ।",
        "ओटीपीची मुदत संपली. नवीन ओटीपी मागवा.",
    ]),
    ("staffLogin", ["Staff Login", "स्टाफ लॉग इन", "कर्मचारी लॉग इन"]),
    ("username", ["Username", "उपयोगकर्ता नाम", "वापरकर्तानाव"]),
    ("password", ["Password", "पासवर्ड", "पासवर्ड"]),
    ("teamRegister", ["Join the Team", "टीम से जुड़ें", "टीममध्ये सामील व्हा"]),
    ("teamRegistered", [
        "Registration received. The admin will verify your account.",
        "पंजीकरण प्राप्त हुआ। एडमिन आपके खाते की पुष्टि करेंगे।",
        "नोंदणी मिळाली. ॲडमिन तुमचे खाते पडताळतील.",
    ]),
    ("registerLogin", ["Register & Login", "पंजीकरण करें और लॉग इन करें", "नोंदणी करा आणि लॉग इन करा"]),
    // Artisan registration
    ("artisanRegTitle", ["Artisan Registration", "कारीगर पंजीकरण", "कारागीर नोंदणी"]),
    ("artisanRegSub", [
        "Join our community and reach customers across India.",
        "हमारे समुदाय से जुड़ें और पूरे भारत के ग्राहकों तक पहुँचें।",
        "आमच्या समुदायात सामील व्हा आणि भारतभरातील ग्राहकांपर्यंत पोहोचा.",
    ]),
    ("artTypeLabel", ["Type of Art", "कला का प्रकार", "कलेचा प्रकार"]),
    ("otherArtType", ["Other (please specify)", "अन्य (कृपया बताएँ)", "इतर (कृपया नमूद करा)"]),
    ("photoLabel", ["Profile Photo", "प्रोफ़ाइल फ़ोटो", "प्रोफाइल फोटो"]),
    ("uploadPhoto", ["Upload Photo", "फ़ोटो अपलोड करें", "फोटो अपलोड करा"]),
    ("optional", ["Optional", "वैकल्पिक", "पर्यायी"]),
    ("contactLabel", ["Contact Number", "संपर्क नंबर", "संपर्क क्रमांक"]),
    // Producer dashboard
    ("addProduct", ["Add New Product", "नया उत्पाद जोड़ें", "नवीन उत्पादन जोडा"]),
    ("prodTitle", ["Product Title", "उत्पाद का नाम", "उत्पादनाचे नाव"]),
    ("prodImage", ["Product Images", "उत्पाद चित्र", "उत्पादन चित्रे"]),
    ("uploadFile", ["Upload files", "फ़ाइलें अपलोड करें", "फायली अपलोड करा"]),
    ("aiHelp", ["Draft description", "विवरण तैयार करें", "वर्णन तयार करा"]),
    ("generating", ["Generating...", "तैयार हो रहा है...", "तयार होत आहे..."]),
    ("publishProd", ["Publish Product", "उत्पाद प्रकाशित करें", "उत्पादन प्रकाशित करा"]),
    ("myListings", ["My Listings", "मेरी लिस्टिंग", "माझ्या सूची"]),
    ("noListings", ["You have not listed any products yet.", "आपने अभी कोई उत्पाद सूचीबद्ध नहीं किया है।", "तुम्ही अद्याप कोणतेही उत्पादन सूचीबद्ध केलेले नाही."]),
    ("delete", ["Delete", "हटाएँ", "हटवा"]),
    ("productPublished", ["Product published.", "उत्पाद प्रकाशित हुआ।", "उत्पादन प्रकाशित झाले."]),
    // Admin dashboard
    ("adminDashboard", ["Admin Dashboard", "एडमिन डैशबोर्ड", "ॲडमिन डॅशबोर्ड"]),
    ("adminSub", ["Manage orders, payouts and artisans", "ऑर्डर, भुगतान और कारीगरों का प्रबंधन", "ऑर्डर, पेमेंट आणि कारागिरांचे व्यवस्थापन"]),
    ("orderManagement", ["Order Management", "ऑर्डर प्रबंधन", "ऑर्डर व्यवस्थापन"]),
    ("pendingOrders", ["Pending Orders", "लंबित ऑर्डर", "प्रलंबित ऑर्डर"]),
    ("completedOrders", ["Completed Orders", "पूर्ण ऑर्डर", "पूर्ण ऑर्डर"]),
    ("process", ["Process", "प्रक्रिया करें", "प्रक्रिया करा"]),
    ("ship", ["Ship", "भेजें", "पाठवा"]),
    ("complete", ["Complete", "पूर्ण करें", "पूर्ण करा"]),
    ("bankDetails", ["Bank Details", "बैंक विवरण", "बँक तपशील"]),
    ("bankTitle", ["Payout Account", "भुगतान खाता", "पेमेंट खाते"]),
    ("bankSub", [
        "Where marketplace earnings are sent.",
        "बाज़ार की कमाई यहाँ भेजी जाती है।",
        "बाजाराची कमाई येथे पाठवली जाते.",
    ]),
    ("accHolder", ["Account Holder Name", "खाताधारक का नाम", "खातेधारकाचे नाव"]),
    ("bankName", ["Bank Name", "बैंक का नाम", "बँकेचे नाव"]),
    ("ifsc", ["IFSC Code", "आईएफएससी कोड", "आयएफएससी कोड"]),
    ("accNumber", ["Account Number", "खाता संख्या", "खाते क्रमांक"]),
    ("bankUpi", ["UPI ID (optional)", "यूपीआई आईडी (वैकल्पिक)", "यूपीआय आयडी (पर्यायी)"]),
    ("saveDetails", ["Save Details", "विवरण सहेजें", "तपशील जतन करा"]),
    ("saving", ["Saving...", "सहेजा जा रहा है...", "जतन होत आहे..."]),
    ("bankSaved", ["Bank details updated successfully.", "बैंक विवरण सफलतापूर्वक अपडेट हुआ।", "बँक तपशील यशस्वीरित्या अद्यतनित झाले."]),
    ("producers", ["Producers", "उत्पादक", "उत्पादक"]),
    ("noProducers", ["No producers registered yet.", "अभी कोई उत्पादक पंजीकृत नहीं।", "अद्याप कोणताही उत्पादक नोंदणीकृत नाही."]),
    ("blockUser", ["Block", "ब्लॉक करें", "ब्लॉक करा"]),
    ("team", ["Team", "टीम", "टीम"]),
    ("noTeam", ["No team members yet.", "अभी कोई टीम सदस्य नहीं।", "अद्याप टीम सदस्य नाहीत."]),
    ("verify", ["Verify", "सत्यापित करें", "पडताळा"]),
    ("verified", ["Verified", "सत्यापित", "पडताळलेले"]),
    ("awaitingVerification", ["Awaiting verification", "सत्यापन लंबित", "पडताळणी प्रलंबित"]),
    ("newOrder", ["New order received!", "नया ऑर्डर आया!", "नवीन ऑर्डर आली!"]),
    ("dismiss", ["Dismiss", "हटाएँ", "बंद करा"]),
    ("statusUpdated", ["Order status updated.", "ऑर्डर स्थिति अपडेट हुई।", "ऑर्डरची स्थिती अद्यतनित झाली."]),
    // About
    ("aboutTitle", ["About Tribal Art Hub", "ट्राइबल आर्ट हब के बारे में", "ट्रायबल आर्ट हबबद्दल"]),
    ("aboutSubtitle", ["Our Story", "हमारी कहानी", "आमची कथा"]),
    ("aboutHeaderSub", [
        "Bridging India's tribal heritage and the modern marketplace.",
        "भारत की जनजातीय विरासत और आधुनिक बाज़ार के बीच एक सेतु।",
        "भारताचा आदिवासी वारसा आणि आधुनिक बाजार यांमधील दुवा.",
    ]),
    ("founderMessage", ["A Message from Our Founder", "हमारे संस्थापक का संदेश", "आमच्या संस्थापकांचा संदेश"]),
    ("founderBio1", [
        "Growing up near the forests of Bastar, I saw extraordinary art sold for almost nothing.",
        "बस्तर के जंगलों के पास बड़े होते हुए मैंने असाधारण कला को लगभग मुफ़्त बिकते देखा।",
        "बस्तरच्या जंगलांजवळ वाढताना मी असामान्य कला जवळजवळ फुकट विकली जाताना पाहिली.",
    ]),
    ("founderBio2", [
        "Tribal Art Hub exists so that artisans set their own prices and keep what they earn.",
        "ट्राइबल आर्ट हब इसलिए है ताकि कारीगर अपनी कीमत खुद तय करें और अपनी कमाई रखें।",
        "कारागिरांनी स्वतःची किंमत ठरवावी आणि कमाई स्वतःकडे ठेवावी यासाठी ट्रायबल आर्ट हब आहे.",
    ]),
    ("founderRole", ["Founder", "संस्थापक", "संस्थापक"]),
    ("ourTeam", ["Our Team", "हमारी टीम", "आमची टीम"]),
    ("roleOperations", ["Head of Operations", "संचालन प्रमुख", "कार्य प्रमुख"]),
    ("roleTech", ["Technology Lead", "तकनीकी प्रमुख", "तंत्रज्ञान प्रमुख"]),
    ("roleCommunity", ["Community Manager", "समुदाय प्रबंधक", "समुदाय व्यवस्थापक"]),
    ("roleMarketing", ["Marketing Lead", "मार्केटिंग प्रमुख", "विपणन प्रमुख"]),
    ("contactUs", ["Contact Us", "संपर्क करें", "संपर्क करा"]),
    ("emailLabel", ["Email", "ईमेल", "ईमेल"]),
    ("callLabel", ["Call", "कॉल करें", "कॉल करा"]),
    ("visitLabel", ["Visit", "पता", "भेट द्या"]),
    ("followUs", ["Follow Us", "हमें फ़ॉलो करें", "आम्हाला फॉलो करा"]),
    ("socialText", [
        "Stories from our artisans, every week.",
        "हर हफ़्ते हमारे कारीगरों की कहानियाँ।",
        "दर आठवड्याला आमच्या कारागिरांच्या कथा.",
    ]),
    ("copyright", [
        "© 2024 Tribal Art Hub. All rights reserved.",
        "© 2024 ट्राइबल आर्ट हब। सर्वाधिकार सुरक्षित।",
        "© 2024 ट्रायबल आर्ट हब. सर्व हक्क राखीव.",
    ]),
    // Errors
    ("loginRequired", ["Please log in to continue.", "जारी रखने के लिए लॉग इन करें।", "पुढे जाण्यासाठी लॉग इन करा."]),
    ("forbidden", [
        "You do not have access to that page.",
        "आपको इस पेज की अनुमति नहीं है।",
        "तुम्हाला या पानाचा प्रवेश नाही.",
    ]),
    ("productNotFound", ["Product not found.", "उत्पाद नहीं मिला।", "उत्पादन आढळले नाही."]),
    ("orderNotFound", ["Order not found.", "ऑर्डर नहीं मिला।", "ऑर्डर आढळली नाही."]),
    ("userNotFound", ["User not found.", "उपयोगकर्ता नहीं मिला।", "वापरकर्ता आढळला नाही."]),
    ("outOfStock", [
        "Not enough stock for one of your items.",
        "आपके किसी सामान का पर्याप्त स्टॉक नहीं है।",
        "तुमच्या एका वस्तूचा पुरेसा साठा नाही.",
    ]),
    ("contactTaken", [
        "This mobile number is already registered.",
        "यह मोबाइल नंबर पहले से पंजीकृत है।",
        "हा मोबाइल क्रमांक आधीच नोंदणीकृत आहे.",
    ]),
    ("notRegistered", [
        "Mobile number not registered. Please register first.",
        "मोबाइल नंबर पंजीकृत नहीं है। पहले पंजीकरण करें।",
        "मोबाइल क्रमांक नोंदणीकृत नाही. आधी नोंदणी करा.",
    ]),
    ("usernameTaken", ["That username is taken.", "यह उपयोगकर्ता नाम पहले से लिया गया है।", "हे वापरकर्तानाव आधीच घेतले आहे."]),
    ("accountPending", [
        "Your account is awaiting admin verification.",
        "आपका खाता एडमिन सत्यापन की प्रतीक्षा में है।",
        "तुमचे खाते ॲडमिन पडताळणीच्या प्रतीक्षेत आहे.",
    ]),
    ("invalidCredentials", ["Invalid username or password.", "गलत उपयोगकर्ता नाम या पासवर्ड।", "चुकीचे वापरकर्तानाव किंवा पासवर्ड."]),
    ("notCancellable", [
        "This order can no longer be cancelled.",
        "यह ऑर्डर अब रद्द नहीं किया जा सकता।",
        "ही ऑर्डर आता रद्द करता येणार नाही.",
    ]),
    ("invalidIfsc", ["Please enter a valid IFSC code.", "कृपया सही आईएफएससी कोड दर्ज करें।", "कृपया वैध आयएफएससी कोड टाका."]),
    ("invalidAccountNumber", [
        "Account number must be 9 to 18 digits.",
        "खाता संख्या 9 से 18 अंकों की होनी चाहिए।",
        "खाते क्रमांक 9 ते 18 अंकी असावा.",
    ]),
    ("invalidVpa", ["Please enter a valid UPI ID.", "कृपया सही यूपीआई आईडी दर्ज करें।", "कृपया वैध यूपीआय आयडी टाका."]),
    ("invalidCard", ["Please enter valid card details.", "कृपया सही कार्ड विवरण दर्ज करें।", "कृपया वैध कार्ड तपशील टाका."]),
    ("tooManyRequests", [
        "Too many attempts. Please wait a moment.",
        "बहुत अधिक प्रयास। कृपया थोड़ी देर रुकें।",
        "खूप प्रयत्न झाले. कृपया थोडा वेळ थांबा.",
    ]),
    ("imageTooLarge", ["Image is too large.", "चित्र बहुत बड़ा है।", "चित्र खूप मोठे आहे."]),
    ("weakPassword", [
        "Password must be at least 8 characters.",
        "पासवर्ड कम से कम 8 अक्षरों का होना चाहिए।",
        "पासवर्ड किमान 8 अक्षरांचा असावा.",
    ]),
    ("invalidEmail", ["Please enter a valid email.", "कृपया सही ईमेल दर्ज करें।", "कृपया वैध ईमेल टाका."]),
    ("invalidImage", [
        "Please upload a JPEG, PNG, WebP or GIF image.",
        "कृपया JPEG, PNG, WebP या GIF चित्र अपलोड करें।",
        "कृपया JPEG, PNG, WebP किंवा GIF चित्र अपलोड करा.",
    ]),
    ("somethingWrong", ["Something went wrong.", "कुछ गलत हो गया।", "काहीतरी चुकले."]),
    ("pageNotFound", ["Page not found.", "पेज नहीं मिला।", "पान आढळले नाही."]),
    // Notices
    ("addedToCart", ["Added to cart.", "कार्ट में जोड़ा गया।", "कार्टमध्ये जोडले."]),
    ("reviewAdded", ["Thanks for your review!", "आपकी समीक्षा के लिए धन्यवाद!", "तुमच्या पुनरावलोकनाबद्दल धन्यवाद!"]),
    ("productDeleted", ["Listing removed.", "लिस्टिंग हटाई गई।", "लिस्टिंग काढली."]),
    ("producerRegistered", [
        "Welcome! Your studio is now live.",
        "स्वागत है! आपका स्टूडियो अब लाइव है।",
        "स्वागत आहे! तुमचा स्टुडिओ आता सुरू झाला आहे.",
    ]),
    ("loggedOut", ["You have been logged out.", "आप लॉग आउट हो गए हैं।", "तुम्ही लॉग आउट झाला आहात."]),
    ("guestRole", ["Guest", "अतिथि", "पाहुणे"]),
    ("guestDesc", ["Browse without signing in", "बिना लॉग इन किए देखें", "लॉग इन न करता पाहा"]),
    ("staffDesc", ["Admin and team sign-in", "एडमिन और टीम लॉग इन", "ॲडमिन आणि टीम लॉग इन"]),
    ("demoOtpCode", ["Demo code (no SMS is sent)", "डेमो कोड (कोई एसएमएस नहीं भेजा गया)", "डेमो कोड (एसएमएस पाठवला जात नाही)"]),
    ("update", ["Update", "अपडेट करें", "अद्ययावत करा"]),
    ("status", ["Status", "स्थिति", "स्थिती"]),
    ("items", ["Items", "वस्तुएँ", "वस्तू"]),
];
